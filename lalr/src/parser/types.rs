
/*
 * A decoded ACTION cell.
 *
 * Cells are stored as signed integers: a positive value shifts to
 * that state, -(p + 1) reduces by production p, -(P + 1) halts
 * (P being the number of productions) and 0 is an error.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Halt,
    Error,
}

impl Action {
    /// Returns `None` for negative values beyond the halt code.
    pub fn decode(value: i64, production_count: usize) -> Option<Action> {
        let productions = production_count as i64;

        match value {
            0 => Some(Action::Error),
            v if v > 0 => Some(Action::Shift(v as usize)),
            v if v == -(productions + 1) => Some(Action::Halt),
            v if v >= -productions => Some(Action::Reduce((-v - 1) as usize)),
            _ => None,
        }
    }

    pub fn encode(self, production_count: usize) -> i64 {
        match self {
            Action::Shift(q) => q as i64,
            Action::Reduce(p) => -(p as i64) - 1,
            Action::Halt => -(production_count as i64) - 1,
            Action::Error => 0,
        }
    }
}
