//! The router side of registration

use std::path::Path;

use crate::route::DiscoveredRoute;

/// Anything routes can be registered on.
///
/// Web framework adapters implement this to mount the handler at `path` under
/// `route`. The return value of the framework's own registration call is not
/// inspected.
pub trait RouteSink {
    fn add_route(&mut self, route: &str, path: &Path);
}

impl<F> RouteSink for F
where
    F: FnMut(&str, &Path),
{
    fn add_route(&mut self, route: &str, path: &Path) {
        self(route, path)
    }
}

/// Collects registrations, useful for dry runs and tests.
impl RouteSink for Vec<DiscoveredRoute> {
    fn add_route(&mut self, route: &str, path: &Path) {
        self.push(DiscoveredRoute::new(route, path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |route: &str, path: &Path| seen.push(format!("{} -> {}", route, path.display()));
        sink.add_route("/users", Path::new("routes/users.route.js"));
        assert_eq!(seen, vec!["/users -> routes/users.route.js"]);
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<DiscoveredRoute> = Vec::new();
        sink.add_route("/a", Path::new("a.route.js"));
        sink.add_route("/b", Path::new("b.route.js"));
        assert_eq!(
            sink,
            vec![
                DiscoveredRoute::new("/a", "a.route.js"),
                DiscoveredRoute::new("/b", "b.route.js"),
            ]
        );
    }
}
