use regex::RegexBuilder;

use pixbot_image::Frame;

use crate::error::DispatchError;
use crate::transform::{Arity, TransformKind};

/// The fixed catalog declaration, in override-priority order from
/// lowest to highest.
const CATALOG_SPEC: [(&str, &str, TransformKind); 16] = [
    ("GRAY", r"gr[ea]y", TransformKind::Gray),
    ("HSV", "hsv", TransformKind::Hsv),
    ("RED", "red", TransformKind::Red),
    ("GREEN", "green", TransformKind::Green),
    ("BLUE", "blue", TransformKind::Blue),
    ("HUE", "hue", TransformKind::Hue),
    ("SAT", "sat", TransformKind::Sat),
    ("VAL", "val", TransformKind::Val),
    ("BLUR", "blur", TransformKind::Blur),
    ("SHARP", "sharp", TransformKind::Sharpen),
    ("NORM", "norm", TransformKind::Normalize),
    ("SOBEL", "sobel", TransformKind::Sobel),
    ("HISTEQ", "histeq|contrast", TransformKind::HistEq),
    ("DFT", "fourier|dft", TransformKind::Dft),
    ("ROTATE", "rot", TransformKind::Rotate),
    ("THRESH", "^thresh", TransformKind::Threshold),
];

/// A single binding between a command pattern and a transform.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    name: &'static str,
    pattern: regex::Regex,
    kind: TransformKind,
}

impl CatalogEntry {
    /// Create a catalog entry from a case-insensitive, substring-matched
    /// pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new(
        name: &'static str,
        pattern: &str,
        kind: TransformKind,
    ) -> Result<Self, DispatchError> {
        Ok(Self {
            name,
            pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
            kind,
        })
    }

    /// The diagnostic label of the entry.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern the name token is matched against.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A resolved transform invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// The diagnostic label of the selected catalog entry.
    pub name: &'static str,
    /// The selected transform.
    pub kind: TransformKind,
    /// The raw argument token, when present and consumed by the transform.
    pub arg: Option<&'a str>,
}

/// The fixed, ordered list of command-to-transform bindings.
///
/// The catalog is built once at startup and never mutated afterwards,
/// so it can be shared across request workers without synchronization.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the standard catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, DispatchError> {
        let entries = CATALOG_SPEC
            .iter()
            .map(|&(name, pattern, kind)| CatalogEntry::new(name, pattern, kind))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_entries(entries))
    }

    /// Build a catalog from an explicit ordered entry list.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Iterate over the (name, pattern) bindings in declaration order,
    /// for rendering a command listing.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|e| (e.name(), e.pattern()))
    }

    /// Resolve a raw command string to a transform invocation.
    ///
    /// The command is tokenized by whitespace; token 0 is matched
    /// against every entry pattern and token 1, if present, becomes the
    /// argument token. The scan deliberately does not stop at the first
    /// hit: the catalog order encodes override priority from lowest to
    /// highest, so the **last** matching entry wins.
    ///
    /// Returns `None` for an empty or unrecognized command.
    pub fn resolve<'a>(&self, raw: &'a str) -> Option<Invocation<'a>> {
        let mut tokens = raw.split_whitespace();
        let name_token = tokens.next()?;
        let arg_token = tokens.next();

        let mut selected = None;
        for entry in &self.entries {
            if entry.pattern.is_match(name_token) {
                selected = Some(entry);
            }
        }

        let entry = selected?;
        log::debug!("resolved command {:?} to {}", name_token, entry.name);

        let arg = match entry.kind.arity() {
            Arity::Optional => arg_token,
            Arity::Nullary => None,
        };

        Some(Invocation {
            name: entry.name,
            kind: entry.kind,
            arg,
        })
    }

    /// Resolve a command and apply the selected transform to a frame.
    ///
    /// Returns `Ok(None)` when the command is unrecognized; the caller
    /// decides how to report that to the user.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingImage`] when a transform was
    /// resolved but no frame was supplied, and propagates transform
    /// failures.
    pub fn process(&self, raw: &str, frame: Option<&Frame>) -> Result<Option<Frame>, DispatchError> {
        let Some(invocation) = self.resolve(raw) else {
            log::debug!("unrecognized command: {raw:?}");
            return Ok(None);
        };

        let frame = frame.ok_or(DispatchError::MissingImage)?;
        let result = invocation.kind.apply(frame, invocation.arg)?;

        log::info!(
            "processed {}x{} frame with {}",
            frame.width(),
            frame.height(),
            invocation.name
        );

        Ok(Some(result))
    }
}
