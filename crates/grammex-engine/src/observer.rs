use grammex_resolve::Matcher;

/// Hooks into the matching engine. Every method defaults to doing nothing.
pub trait MatchObserver {
    /// A matcher starts at `offset`, `depth` calls deep (`TOP` is 1).
    fn on_enter(&mut self, _matcher: &Matcher, _offset: usize, _depth: usize) {}

    /// A matcher started at `offset` finished; `consumed` is `None` on failure.
    fn on_exit(&mut self, _matcher: &Matcher, _offset: usize, _consumed: Option<usize>) {}

    /// Atom number `atom` of `matcher` did not match at `offset`.
    fn on_atom_failed(&mut self, _matcher: &Matcher, _atom: usize, _offset: usize) {}
}

impl<O: MatchObserver + ?Sized> MatchObserver for &mut O {
    fn on_enter(&mut self, matcher: &Matcher, offset: usize, depth: usize) {
        (**self).on_enter(matcher, offset, depth)
    }

    fn on_exit(&mut self, matcher: &Matcher, offset: usize, consumed: Option<usize>) {
        (**self).on_exit(matcher, offset, consumed)
    }

    fn on_atom_failed(&mut self, matcher: &Matcher, atom: usize, offset: usize) {
        (**self).on_atom_failed(matcher, atom, offset)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Forwards engine events to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn on_enter(&mut self, matcher: &Matcher, offset: usize, depth: usize) {
        log::trace!("enter `{}` at {} (depth {})", matcher.name(), offset, depth);
    }

    fn on_exit(&mut self, matcher: &Matcher, offset: usize, consumed: Option<usize>) {
        match consumed {
            Some(n) => log::trace!("exit `{}` at {}: consumed {}", matcher.name(), offset, n),
            None => log::trace!("exit `{}` at {}: no match", matcher.name(), offset),
        }
    }

    fn on_atom_failed(&mut self, matcher: &Matcher, atom: usize, offset: usize) {
        log::trace!("atom #{} of `{}` failed at {}", atom, matcher.name(), offset);
    }
}
