use crate::button::Direction;

/// Writes for one step of a sweep. Either index may be absent near the ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub light: Option<usize>,
    pub extinguish: Option<usize>,
}

/// One run of the light trail across `len` indicators.
///
/// Yields `len + trail` steps. Step `i` lights indicator `i` while it is on the
/// array and puts out indicator `i - trail`, so the last `trail` steps only
/// extinguish and the array ends dark. A reverse sweep is the same walk with
/// indices mirrored.
#[derive(Clone, Debug)]
pub struct Sweep {
    direction: Direction,
    len: usize,
    trail: usize,
    step: usize,
}

impl Sweep {
    pub fn new(direction: Direction, len: usize, trail: usize) -> Self {
        Self {
            direction,
            len,
            trail,
            step: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn place(&self, position: usize) -> usize {
        match self.direction {
            Direction::Forward => position,
            Direction::Reverse => self.len - 1 - position,
        }
    }
}

impl Iterator for Sweep {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let total = self.len + self.trail;
        if self.step >= total {
            return None;
        }
        let position = self.step;
        self.step += 1;

        let light = (position < self.len).then(|| self.place(position));
        let extinguish = position
            .checked_sub(self.trail)
            .filter(|&behind| behind < self.len)
            .map(|behind| self.place(behind));
        Some(Step { light, extinguish })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len + self.trail).saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}
