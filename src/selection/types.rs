//! Core trait for priority rules.

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return integer scores where **lower is higher priority**.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context type providing state information
///
/// # Examples
///
/// ```
/// use u_rosterfill::selection::PriorityRule;
///
/// struct ShortestName;
///
/// impl PriorityRule<String, ()> for ShortestName {
///     fn name(&self) -> &str { "ShortestName" }
///     fn score(&self, item: &String, _ctx: &()) -> i64 {
///         item.len() as i64
///     }
/// }
///
/// assert_eq!(ShortestName.score(&"GCE".to_string(), &()), 3);
/// ```
pub trait PriorityRule<T, C> {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &T, context: &C) -> i64;
}
