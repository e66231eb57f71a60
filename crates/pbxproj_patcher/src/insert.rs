// crates/pbxproj_patcher/src/insert.rs

use calendar_permission_keys::{insertion_block, ANCHOR_PATTERN};
use once_cell::sync::Lazy;
use regex::Regex;

static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ANCHOR_PATTERN).expect("anchor pattern is a valid regex"));

/// Knobs for [`insert_after_anchors`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Leave an anchor alone when the insertion block already follows it.
    /// Off by default, so re-running stacks a second copy of the block.
    pub skip_already_patched: bool,
}

/// Result of rewriting the project text in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchedText {
    pub content: String,
    /// Anchors found.
    pub matched: usize,
    /// Anchors that received a new copy of the block.
    pub inserted: usize,
}

/// Inserts the calendar permission keys after every anchor statement.
///
/// Matches are non-overlapping and visited in document order. Each anchor
/// is reproduced verbatim, followed by `\n` and the insertion block; every
/// other byte of `content` is copied through unchanged.
pub fn insert_after_anchors(content: &str, options: PatchOptions) -> PatchedText {
    let block = insertion_block();
    let mut output = String::with_capacity(content.len() + block.len() * 4);
    let mut cursor = 0;
    let mut matched = 0;
    let mut inserted = 0;

    for anchor in ANCHOR_RE.find_iter(content) {
        output.push_str(&content[cursor..anchor.end()]);
        cursor = anchor.end();
        matched += 1;

        if options.skip_already_patched && is_followed_by_block(&content[cursor..], &block) {
            log::debug!("anchor at byte {} already patched, skipping", anchor.start());
            continue;
        }
        output.push('\n');
        output.push_str(&block);
        inserted += 1;
    }
    output.push_str(&content[cursor..]);

    PatchedText {
        content: output,
        matched,
        inserted,
    }
}

fn is_followed_by_block(rest: &str, block: &str) -> bool {
    rest.strip_prefix('\n')
        .map(|after| after.starts_with(block))
        .unwrap_or(false)
}
