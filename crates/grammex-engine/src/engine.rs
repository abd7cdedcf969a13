//! Matching over a compiled [`Grammar`].
//!
//! Matching is strict concatenation: a matcher's atoms are tried in order
//! starting where the previous one stopped, and the first atom that fails
//! fails the matcher. There is no backtracking and no partial result.
//!
//! References are followed with an explicit stack of frames rather than
//! native recursion, so deep grammars are limited by `max_depth` only.

use crate::observer::{MatchObserver, NoopObserver};
use crate::options::MatchOptions;
use crate::result::{ChildMatch, MatchResult};
use crate::{EngineResult, MatchError};
use grammex_resolve::{Atom, Grammar, Matcher, MatcherId};
use rustc_hash::FxHashSet;

/// A successful match: bytes consumed from the start offset, and the result tree.
pub type Match<'i> = (usize, MatchResult<'i>);

/// Match `grammar` against `input` with default options.
pub fn match_grammar<'i>(grammar: &Grammar, input: &'i str) -> EngineResult<Option<Match<'i>>> {
    Engine::new(grammar).match_grammar(input)
}

/// Match the matcher `id` of `grammar` against `input` at `offset`, with
/// default options.
pub fn match_matcher<'i>(
    grammar: &Grammar,
    id: MatcherId,
    input: &'i str,
    offset: usize,
) -> EngineResult<Option<Match<'i>>> {
    Engine::new(grammar).match_matcher(id, input, offset)
}

/// Borrows one grammar and matches input against it.
///
/// Each call starts with a fresh call stack, so an engine can be reused for
/// any number of inputs. Engines are cheap; make one per thread to match
/// a shared grammar concurrently.
pub struct Engine<'g, O = NoopObserver> {
    grammar: &'g Grammar,
    options: MatchOptions,
    observer: O,
}

impl<'g> Engine<'g, NoopObserver> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            options: MatchOptions::default(),
            observer: NoopObserver,
        }
    }
}

impl<'g, O: MatchObserver> Engine<'g, O> {
    /// Replace the observer, keeping grammar and options.
    pub fn with_observer<P: MatchObserver>(self, observer: P) -> Engine<'g, P> {
        Engine {
            grammar: self.grammar,
            options: self.options,
            observer,
        }
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Match `TOP` at offset 0.
    ///
    /// When `TOP` matched through exactly one atom, that atom's result is
    /// returned in place of the `TOP` wrapper. The consumed length is `TOP`'s
    /// either way. The match does not have to cover the whole input.
    pub fn match_grammar<'i>(&mut self, input: &'i str) -> EngineResult<Option<Match<'i>>> {
        log::debug!("matching grammar `{}` against {} bytes", self.grammar.name(), input.len());

        let outcome = self.match_matcher(self.grammar.top_id(), input, 0)?;
        Ok(outcome.map(|(consumed, mut result)| {
            if result.children.len() == 1 {
                if let Some(only) = result.children.pop() {
                    result = only.result;
                }
            }
            (consumed, result)
        }))
    }

    /// Match one matcher at `offset`.
    ///
    /// Returns `None` when the matcher fails, and also when `offset` is past
    /// the end of `input` or not on a character boundary.
    pub fn match_matcher<'i>(
        &mut self,
        id: MatcherId,
        input: &'i str,
        offset: usize,
    ) -> EngineResult<Option<Match<'i>>> {
        if !input.is_char_boundary(offset) {
            return Ok(None);
        }

        let mut stack = CallStack::default();
        self.enter(&mut stack, id, offset)?;

        loop {
            let frame = match stack.frames.last_mut() {
                Some(frame) => frame,
                None => return Ok(None),
            };

            let matcher = frame.matcher;
            let index = frame.next_atom;
            let step = match matcher.atoms().get(index) {
                None => Step::Done,
                Some(Atom::Literal(text)) => {
                    let end = frame.running + text.len();
                    match input.get(frame.running..end) {
                        Some(found) if found == text.as_str() => {
                            frame.children.push(ChildMatch {
                                atom: index,
                                result: MatchResult::leaf(matcher.name(), found),
                            });
                            frame.running = end;
                            frame.next_atom += 1;
                            Step::Next
                        }
                        _ => Step::Fail,
                    }
                }
                Some(Atom::Reference(target)) => Step::Call(*target, frame.running),
                Some(Atom::Pattern(_)) => Step::Fail,
            };

            match step {
                Step::Next => {}
                Step::Call(target, at) => self.enter(&mut stack, target, at)?,
                Step::Done => {
                    if let Some(done) = self.leave(&mut stack, input) {
                        return Ok(Some(done));
                    }
                }
                Step::Fail => {
                    self.unwind(&mut stack);
                    return Ok(None);
                }
            }
        }
    }

    /// Push a frame for `id` at `offset`, after the recursion checks.
    fn enter(&mut self, stack: &mut CallStack<'g, '_>, id: MatcherId, offset: usize) -> EngineResult<()> {
        let grammar = self.grammar;
        let matcher = grammar.matcher(id);

        if stack.active.contains(&(id, offset)) {
            return Err(MatchError::LeftRecursion {
                matcher: matcher.name().to_string(),
                offset,
            });
        }
        let depth = stack.frames.len() + 1;
        if depth > self.options.max_depth {
            return Err(MatchError::RecursionLimit {
                matcher: matcher.name().to_string(),
                depth,
            });
        }

        stack.active.insert((id, offset));
        self.observer.on_enter(matcher, offset, depth);
        stack.frames.push(Frame {
            id,
            matcher,
            offset,
            running: offset,
            next_atom: 0,
            children: Vec::with_capacity(matcher.atoms().len()),
        });
        Ok(())
    }

    /// Pop a frame whose atoms all matched and hand its result to the
    /// caller's frame. Returns the result once the outermost frame is done.
    fn leave<'i>(&mut self, stack: &mut CallStack<'g, 'i>, input: &'i str) -> Option<Match<'i>> {
        let frame = stack.frames.pop()?;
        stack.active.remove(&(frame.id, frame.offset));

        let consumed = frame.running - frame.offset;
        self.observer.on_exit(frame.matcher, frame.offset, Some(consumed));

        // Literals are whole UTF-8 sequences matched at a boundary, so
        // `running` is still on one.
        let result = MatchResult {
            name: frame.matcher.name().to_string(),
            text: &input[frame.offset..frame.running],
            children: frame.children,
        };

        match stack.frames.last_mut() {
            Some(caller) => {
                caller.children.push(ChildMatch {
                    atom: caller.next_atom,
                    result,
                });
                caller.running += consumed;
                caller.next_atom += 1;
                None
            }
            None => Some((consumed, result)),
        }
    }

    /// No backtracking: one failed atom fails every frame on the stack.
    fn unwind(&mut self, stack: &mut CallStack<'g, '_>) {
        if let Some(frame) = stack.frames.last() {
            self.observer
                .on_atom_failed(frame.matcher, frame.next_atom, frame.running);
        }
        while let Some(frame) = stack.frames.pop() {
            stack.active.remove(&(frame.id, frame.offset));
            self.observer.on_exit(frame.matcher, frame.offset, None);
            if let Some(caller) = stack.frames.last() {
                self.observer
                    .on_atom_failed(caller.matcher, caller.next_atom, caller.running);
            }
        }
    }
}

enum Step {
    Next,
    Call(MatcherId, usize),
    Done,
    Fail,
}

/// A matcher part-way through its atoms.
struct Frame<'g, 'i> {
    id: MatcherId,
    matcher: &'g Matcher,
    offset: usize,
    running: usize,
    next_atom: usize,
    children: Vec<ChildMatch<'i>>,
}

/// Per-call matching state. Frames live on the heap, so the depth limit
/// bounds memory rather than the native stack.
#[derive(Default)]
struct CallStack<'g, 'i> {
    frames: Vec<Frame<'g, 'i>>,
    active: FxHashSet<(MatcherId, usize)>,
}
