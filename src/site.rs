//! Read-only serving context shared by every connection.

use anyhow::{Context, bail};
use url::Url;

use crate::config::SiteConfig;
use crate::files::DocumentRoot;

#[derive(Debug, Clone)]
pub struct Site {
    pub root: DocumentRoot,
    /// When set, redirects carry an absolute URL built on this base.
    pub redirect_base: Option<Url>,
    /// Canonicalize paths and refuse anything outside the root.
    pub strict_containment: bool,
}

impl Site {
    pub fn new(root: DocumentRoot) -> Self {
        Self {
            root,
            redirect_base: None,
            strict_containment: false,
        }
    }

    pub fn from_config(cfg: &SiteConfig) -> anyhow::Result<Self> {
        let root = DocumentRoot::new(&cfg.document_root)
            .with_context(|| format!("invalid document root {:?}", cfg.document_root))?;

        let redirect_base = match cfg.redirect_base.as_deref() {
            Some(raw) => {
                let url = Url::parse(raw).with_context(|| format!("invalid redirect_base {raw:?}"))?;
                if !matches!(url.scheme(), "http" | "https") {
                    bail!("redirect_base must be http or https, got {}", url.scheme());
                }
                if url.query().is_some() || url.fragment().is_some() {
                    bail!("redirect_base must not carry a query or fragment: {raw:?}");
                }
                Some(url)
            }
            None => None,
        };

        Ok(Self {
            root,
            redirect_base,
            strict_containment: cfg.strict_containment,
        })
    }

    /// Where a `BadPath` request is sent: the site-relative path with `/`
    /// appended, prefixed with the redirect base when one is configured.
    ///
    /// The base is prepended as text. The request path is never resolved
    /// as a URL reference, so `//host/x` stays on this site.
    pub fn redirect_location(&self, resolved: &str) -> String {
        let location = format!("{}/", self.root.strip(resolved));

        match &self.redirect_base {
            Some(base) => format!("{}{}", base.as_str().trim_end_matches('/'), location),
            None => location,
        }
    }
}
