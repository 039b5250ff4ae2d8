//! Side-effect seams for in-app navigation and external links.

pub use idconsole_core::LinkTarget;

/// In-app router.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Opens URLs outside the console router. Fire-and-forget.
pub trait LinkOpener {
    fn open(&self, url: &str, target: LinkTarget);
}
