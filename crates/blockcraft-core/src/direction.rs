use glam::IVec3;

/// One of the four horizontal grid steps a cursor can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StepDirection {
    PosX = 0,
    NegX = 1,
    PosZ = 2,
    NegZ = 3,
}

/// All four steps.
pub const ALL_STEPS: [StepDirection; 4] = [
    StepDirection::PosX,
    StepDirection::NegX,
    StepDirection::PosZ,
    StepDirection::NegZ,
];

impl StepDirection {
    /// Offset vector for this step. North is -Z, matching the arrow-up key.
    pub fn offset(self) -> IVec3 {
        match self {
            StepDirection::PosX => IVec3::new(1, 0, 0),
            StepDirection::NegX => IVec3::new(-1, 0, 0),
            StepDirection::PosZ => IVec3::new(0, 0, 1),
            StepDirection::NegZ => IVec3::new(0, 0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            StepDirection::PosX => StepDirection::NegX,
            StepDirection::NegX => StepDirection::PosX,
            StepDirection::PosZ => StepDirection::NegZ,
            StepDirection::NegZ => StepDirection::PosZ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_unit_horizontal() {
        for step in ALL_STEPS {
            let o = step.offset();
            assert_eq!(o.y, 0, "{step:?} moves vertically");
            assert_eq!(o.x.abs() + o.z.abs(), 1, "{step:?} is not a unit step");
        }
    }

    #[test]
    fn test_opposite_cancels() {
        for step in ALL_STEPS {
            assert_eq!(step.offset() + step.opposite().offset(), IVec3::ZERO);
        }
    }

    #[test]
    fn test_steps_unique() {
        for (i, a) in ALL_STEPS.iter().enumerate() {
            for (j, b) in ALL_STEPS.iter().enumerate() {
                if i != j {
                    assert_ne!(a.offset(), b.offset(), "steps {i} and {j} share offset");
                }
            }
        }
    }
}
