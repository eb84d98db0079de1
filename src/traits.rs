/// Surface shared by every container in this crate.
pub trait Container {
    /// Get the number of values in the container
    fn len(&self) -> usize;

    /// Check if the container holds no values
    fn is_empty(&self) -> bool;

    /// Release the container and every node it owns.
    ///
    /// Equivalent to dropping it; the value is consumed so it cannot be
    /// touched afterwards.
    fn free(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}
