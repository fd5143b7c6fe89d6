use std::path::Path;

use direxplorer_base::ExplorerResult;

/* 📖 # Why one handler trait instead of separate event interfaces?

A handler is whatever the caller wants to happen for a directory or a file: print it,
collect it, count it. Subscriber lists and single delegates are just two ways of
plugging that in, so both are implementations of the same trait:

- HandlerList fans one notification out to several handlers in subscription order
- FnHandler binds a pair of closures

The engine borrows the handler for the duration of a search and never owns it.
A handler error aborts the search; the engine does not try to recover from it.
*/

/// Receives notifications from the traversal engine.
pub trait ExplorerHandler {
    /// Called when a directory is reported.
    fn on_directory(&mut self, path: &Path) -> ExplorerResult<()>;

    /// Called for every file delivered within the item limit.
    fn on_file(&mut self, path: &Path) -> ExplorerResult<()>;
}

impl<H: ExplorerHandler + ?Sized> ExplorerHandler for &mut H {
    fn on_directory(&mut self, path: &Path) -> ExplorerResult<()> {
        (**self).on_directory(path)
    }

    fn on_file(&mut self, path: &Path) -> ExplorerResult<()> {
        (**self).on_file(path)
    }
}

impl<H: ExplorerHandler + ?Sized> ExplorerHandler for Box<H> {
    fn on_directory(&mut self, path: &Path) -> ExplorerResult<()> {
        (**self).on_directory(path)
    }

    fn on_file(&mut self, path: &Path) -> ExplorerResult<()> {
        (**self).on_file(path)
    }
}

/// Fans each notification out to every subscribed handler, in subscription order.
///
/// The first failing handler stops the fan-out and its error is returned.
#[derive(Default)]
pub struct HandlerList<'a> {
    handlers: Vec<Box<dyn ExplorerHandler + 'a>>,
}

impl<'a> HandlerList<'a> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, handler: impl ExplorerHandler + 'a) -> &mut Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerList")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl ExplorerHandler for HandlerList<'_> {
    fn on_directory(&mut self, path: &Path) -> ExplorerResult<()> {
        for handler in &mut self.handlers {
            handler.on_directory(path)?;
        }
        Ok(())
    }

    fn on_file(&mut self, path: &Path) -> ExplorerResult<()> {
        for handler in &mut self.handlers {
            handler.on_file(path)?;
        }
        Ok(())
    }
}

/// A handler made of two closures.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use direxplorer_engine::{ExplorerHandler, FnHandler};
///
/// let mut files = 0;
/// let mut handler = FnHandler::new(|_dir: &Path| Ok(()), |_file: &Path| {
///     files += 1;
///     Ok(())
/// });
/// handler.on_file(Path::new("/r/a.txt")).unwrap();
/// drop(handler);
/// assert_eq!(files, 1);
/// ```
pub struct FnHandler<D, F> {
    on_directory: D,
    on_file: F,
}

impl<D, F> FnHandler<D, F>
where
    D: FnMut(&Path) -> ExplorerResult<()>,
    F: FnMut(&Path) -> ExplorerResult<()>,
{
    pub fn new(on_directory: D, on_file: F) -> Self {
        Self {
            on_directory,
            on_file,
        }
    }
}

impl<D, F> ExplorerHandler for FnHandler<D, F>
where
    D: FnMut(&Path) -> ExplorerResult<()>,
    F: FnMut(&Path) -> ExplorerResult<()>,
{
    fn on_directory(&mut self, path: &Path) -> ExplorerResult<()> {
        (self.on_directory)(path)
    }

    fn on_file(&mut self, path: &Path) -> ExplorerResult<()> {
        (self.on_file)(path)
    }
}
