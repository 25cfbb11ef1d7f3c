/// Logging port used by the cart use cases.
///
/// Adapters decide where messages go; the business crate never depends on a
/// concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
