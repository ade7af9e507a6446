use certify_core::Route;

/// Simple in-app routing: the current route plus a back stack.
pub struct WebRouter {
    current_route: Route,
    history: Vec<Route>,
}

impl Default for WebRouter {
    fn default() -> Self {
        Self::new(Route::Landing)
    }
}

impl WebRouter {
    pub fn new(start: Route) -> Self {
        Self {
            current_route: start,
            history: Vec::new(),
        }
    }

    pub fn navigate_to(&mut self, route: Route) {
        if route == self.current_route {
            return;
        }
        log::info!("Navigating {} -> {}", self.current_route, route);
        let previous = std::mem::replace(&mut self.current_route, route);
        self.history.push(previous);
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                log::info!("Navigating back to {}", route);
                self.current_route = route;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_route(&self) -> &Route {
        &self.current_route
    }
}
