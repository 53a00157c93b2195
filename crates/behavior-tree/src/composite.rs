//! Composite behavior nodes.
//!
//! [`Selector`] is the priority chain: it tries its children in order and
//! stops at the first one that acts.

use async_trait::async_trait;

use crate::{Behavior, Status};

/// Tries child behaviors in priority order until one acts.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from first to last:
/// - If a child returns `Acted`, the selector **stops immediately** and returns `Acted`
/// - If a child returns `Declined`, the selector **continues** to the next child
/// - If a child returns an error, the selector **stops** and propagates it
/// - If every child declines, the selector returns `Declined`
///
/// This is analogous to a short-circuited logical OR (||) operation, which
/// guarantees at most one child acts per pass.
pub struct Selector<C: Send, E: Send> {
    name: &'static str,
    children: Vec<Box<dyn Behavior<C, E>>>,
}

impl<C: Send, E: Send> Selector<C, E> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: &'static str, children: Vec<Box<dyn Behavior<C, E>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { name, children }
    }

    /// Names of the children in priority order.
    pub fn child_names(&self) -> Vec<&'static str> {
        self.children.iter().map(|c| c.name()).collect()
    }

    /// Runs one pass and reports which child acted, if any.
    pub async fn select(&self, ctx: &mut C) -> Result<Option<&'static str>, E> {
        for child in &self.children {
            if child.tick(ctx).await?.is_acted() {
                return Ok(Some(child.name())); // Short-circuit
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl<C: Send, E: Send> Behavior<C, E> for Selector<C, E> {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        Ok(self.select(ctx).await?.is_some().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        visited: Vec<&'static str>,
    }

    struct Fixed {
        name: &'static str,
        outcome: Result<Status, &'static str>,
    }

    #[async_trait]
    impl Behavior<TestContext, &'static str> for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn tick(&self, ctx: &mut TestContext) -> Result<Status, &'static str> {
            ctx.visited.push(self.name);
            self.outcome
        }
    }

    fn node(
        name: &'static str,
        outcome: Result<Status, &'static str>,
    ) -> Box<dyn Behavior<TestContext, &'static str>> {
        Box::new(Fixed { name, outcome })
    }

    #[tokio::test]
    async fn selector_stops_at_first_acting_child() {
        let sel = Selector::new(
            "root",
            vec![
                node("a", Ok(Status::Declined)),
                node("b", Ok(Status::Acted)),
                node("c", Ok(Status::Acted)), // Should not execute
            ],
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.select(&mut ctx).await, Ok(Some("b")));
        assert_eq!(ctx.visited, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn selector_declines_when_all_decline() {
        let sel = Selector::new(
            "root",
            vec![node("a", Ok(Status::Declined)), node("b", Ok(Status::Declined))],
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx).await, Ok(Status::Declined));
        assert_eq!(ctx.visited, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn selector_propagates_errors_and_stops() {
        let sel = Selector::new(
            "root",
            vec![node("a", Err("boom")), node("b", Ok(Status::Acted))],
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.select(&mut ctx).await, Err("boom"));
        assert_eq!(ctx.visited, vec!["a"]);
    }

    #[test]
    fn child_names_keep_priority_order() {
        let sel = Selector::new(
            "root",
            vec![node("first", Ok(Status::Acted)), node("second", Ok(Status::Acted))],
        );
        assert_eq!(sel.child_names(), vec!["first", "second"]);
        assert_eq!(sel.name(), "root");
    }
}
