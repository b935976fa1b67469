//! Image-fetcher collaborator contract.

use crate::view::node::{SizeConstraint, Units};

/// Resolved avatar bitmap metadata.
///
/// Real hosts carry pixel data alongside; the core contract only needs the
/// resolved frame so renderers can lay it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageData {
    pub width: Units,
    pub height: Units,
}

/// External image-loading collaborator.
///
/// Given a URL and the target frame constraint, produces displayable image
/// data or declines. Caching, retries and cancellation are the implementor's
/// business; no error surfaces through this seam — `None` simply leaves the
/// avatar region blank.
pub trait ImageFetcher {
    fn fetch(&self, url: &str, constraint: SizeConstraint) -> Option<ImageData>;
}

/// Fetcher that declines every request, leaving image regions blank.
///
/// Default collaborator for hosts without image loading (the CLI probe).
#[derive(Debug, Default, Clone, Copy)]
pub struct BlankFetcher;

impl ImageFetcher for BlankFetcher {
    fn fetch(&self, _url: &str, _constraint: SizeConstraint) -> Option<ImageData> {
        None
    }
}
