use std::io::Write;
use std::path::Path;

use direxplorer_base::{ExplorerError, ExplorerResult};

use crate::ExplorerHandler;

/// Prints every reported directory and file, one per line.
///
/// ```
/// use std::path::Path;
/// use direxplorer_engine::{DisplayHandler, ExplorerHandler};
///
/// let mut display = DisplayHandler::new(Vec::new());
/// display.on_directory(Path::new("/r")).unwrap();
/// display.on_file(Path::new("/r/a.txt")).unwrap();
/// let text = String::from_utf8(display.into_inner()).unwrap();
/// assert_eq!(text, "  dir--->  /r\n  file-->    /r/a.txt\n");
/// ```
#[derive(Debug)]
pub struct DisplayHandler<W: Write> {
    out: W,
}

impl<W: Write> DisplayHandler<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, prefix: &str, path: &Path) -> ExplorerResult<()> {
        writeln!(self.out, "  {}{}", prefix, path.display())
            .map_err(|e| Box::new(ExplorerError::file_error("<output>", e)))
    }
}

impl<W: Write> ExplorerHandler for DisplayHandler<W> {
    fn on_directory(&mut self, path: &Path) -> ExplorerResult<()> {
        self.write_line("dir--->  ", path)
    }

    fn on_file(&mut self, path: &Path) -> ExplorerResult<()> {
        self.write_line("file-->    ", path)
    }
}
