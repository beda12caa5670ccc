//! Image reference rewriting
//!
//! Two families of references point at files that moved:
//! - markdown links into the standalone images folder, `![x](images/a.png)`
//! - paths into the converter's generated folder, `nb_files/nb_3_0.png`,
//!   which the converter writes URL-encoded (`my%20nb_files/...`)
//!
//! Both are rewritten to the post's public asset URL. Rewritten references
//! no longer match either pattern, so rewriting twice changes nothing.

use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::error::NbBlogResult;
use crate::fs::atomic_write;

/// Rewrites image references of one post
#[derive(Debug, Clone)]
pub struct ReferenceRewriter {
    static_link: Regex,
    generated_ref: Regex,
    generated_url_dir: String,
    asset_url: String,
}

impl ReferenceRewriter {
    /// `static_dir` is the standalone images folder (`images`), `generated_dir`
    /// the converter's folder name (`<stem>_files`), `asset_url` the public
    /// path of the post's asset directory.
    pub fn new(static_dir: &str, generated_dir: &str, asset_url: &str) -> Self {
        let static_dir = static_dir.trim_matches('/');
        // `](images/x.png)`, `](./images/x.png)` or `](images/x.png "Title")`;
        // link syntax keeps prose untouched
        let static_link = Regex::new(&format!(
            r#"\]\((?:\./)?{}/([^)\s]+)(\s+"[^"]*")?\)"#,
            regex::escape(static_dir)
        ))
        .expect("escaped static image pattern is valid");

        let generated_url_dir = url_escape_path(generated_dir);
        let mut spellings = vec![regex::escape(generated_dir)];
        if generated_url_dir != generated_dir {
            spellings.push(regex::escape(&generated_url_dir));
        }
        // Skip occurrences already inside a longer path or name
        let generated_ref = Regex::new(&format!(
            r"(?m)(^|[^/\w.-])(?:\./)?(?:{})/",
            spellings.join("|")
        ))
        .expect("escaped generated image pattern is valid");

        Self {
            static_link,
            generated_ref,
            generated_url_dir,
            asset_url: asset_url.trim_end_matches('/').to_string(),
        }
    }

    /// Apply both substitutions, static links first.
    pub fn rewrite(&self, text: &str) -> String {
        let text = self.static_link.replace_all(text, |caps: &Captures| {
            let title = caps.get(2).map_or("", |m| m.as_str());
            format!("]({}/{}{})", self.asset_url, &caps[1], title)
        });
        let text = self.generated_ref.replace_all(&text, |caps: &Captures| {
            format!("{}{}/{}/", &caps[1], self.asset_url, self.generated_url_dir)
        });
        text.into_owned()
    }

    /// Rewrite a file in place. Returns whether its content changed.
    pub fn rewrite_file(&self, path: &Path) -> NbBlogResult<bool> {
        let contents = fs::read_to_string(path)?;
        let rewritten = self.rewrite(&contents);
        if rewritten == contents {
            return Ok(false);
        }
        atomic_write(path, rewritten.as_bytes())?;
        Ok(true)
    }
}

/// Percent-encode a relative path the way the converter writes it into links.
///
/// ASCII letters, digits, `_.-~` and `/` stay as they are; every other byte
/// becomes `%XX`.
pub fn url_escape_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
