use super::ResultSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Position of the current match: `(result index, match index within that result)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub result: usize,
    pub matched: usize,
}

impl Cursor {
    /// Move one match in `direction`, crossing into the neighbouring span at
    /// either end and wrapping around the whole set.
    ///
    /// Returns `false` (and leaves the cursor alone) when `results` is empty.
    pub fn step(&mut self, results: &ResultSet, direction: Direction) -> bool {
        let span_count = results.len();
        if span_count == 0 {
            return false;
        }
        let matches_in = |i: usize| results.get(i).map_or(0, |e| e.matches.len());

        match direction {
            Direction::Forward => {
                if self.matched + 1 < matches_in(self.result) {
                    self.matched += 1;
                } else {
                    self.result = (self.result + 1) % span_count;
                    self.matched = 0;
                }
            }
            Direction::Backward => {
                if self.matched > 0 {
                    self.matched -= 1;
                } else {
                    self.result = if self.result > 0 {
                        self.result - 1
                    } else {
                        span_count - 1
                    };
                    self.matched = matches_in(self.result).saturating_sub(1);
                }
            }
        }
        true
    }
}
