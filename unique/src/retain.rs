/// In-place version of [`unique`](crate::unique).
pub trait RetainUnique {
    /// Removes every element that is equal to an earlier one, keeping the
    /// survivors in their original order.
    fn retain_unique(&mut self);
}

impl<T: PartialEq> RetainUnique for Vec<T> {
    fn retain_unique(&mut self) {
        // Everything before `kept` is a first occurrence. Elements that get
        // swapped past it are duplicates we've already looked at, and will be
        // truncated away.
        let mut kept = 0;
        for i in 0..self.len() {
            if !self[..kept].contains(&self[i]) {
                self.swap(kept, i);
                kept += 1;
            }
        }
        self.truncate(kept);
    }
}
