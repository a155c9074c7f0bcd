use std::io;

/// Hands a retrieval link to something outside the app.
pub trait LinkOpener: Send {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens links with the desktop's default handler.
///
/// The URL reaches the handler as a single argument, never through a
/// shell, so `&` and friends in query strings stay part of the link.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

/// Leaves opening to the user; the link is printed by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintOnlyOpener;

impl LinkOpener for PrintOnlyOpener {
    fn open(&self, _url: &str) -> io::Result<()> {
        Ok(())
    }
}
