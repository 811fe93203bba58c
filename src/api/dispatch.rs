/// What to do with a request before its body is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Preflight,
    Proceed,
    Reject,
}

/// Methods are matched exactly; `"post"` is not `POST`.
#[must_use]
pub fn dispatch(method: &str) -> Dispatch {
    match method {
        "OPTIONS" => Dispatch::Preflight,
        "POST" => Dispatch::Proceed,
        _ => Dispatch::Reject,
    }
}
