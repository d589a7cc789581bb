//! Grade -> stage transitions.
//!
//! 0 resets the task, positive grades move it forward that many stages,
//! negative grades move it back. Stages never go below zero.

/// Grade that resets a task to stage 0 and reveals its answer.
pub const RESET_GRADE: i32 = 0;

pub fn apply_grade(stage: u32, grade: i32) -> u32 {
    if grade == RESET_GRADE {
        return 0;
    }
    let next = i64::from(stage) + i64::from(grade);
    next.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        assert_eq!(apply_grade(7, 0), 0);
        assert_eq!(apply_grade(0, 0), 0);
    }

    #[test]
    fn test_advance() {
        assert_eq!(apply_grade(0, 1), 1);
        assert_eq!(apply_grade(3, 2), 5);
    }

    #[test]
    fn test_regress_clamps_at_zero() {
        assert_eq!(apply_grade(3, -1), 2);
        assert_eq!(apply_grade(1, -5), 0);
        assert_eq!(apply_grade(0, i32::MIN), 0);
    }

    #[test]
    fn test_saturates_at_top() {
        assert_eq!(apply_grade(u32::MAX, 3), u32::MAX);
    }
}
