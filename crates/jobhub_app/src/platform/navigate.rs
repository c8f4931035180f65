/// Hands posting links to whatever follows links on this host.
pub(crate) trait Navigator {
    fn open(&mut self, url: &str) -> std::io::Result<()>;
}

/// Opens links in the system web browser.
pub(crate) struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}
