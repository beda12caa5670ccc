//! Test fixtures - notebook builders and fake converter output.

#![allow(dead_code)]

/// Build nbformat 4 JSON whose first cell holds `first_cell` lines.
pub fn notebook_json(first_cell: &[&str]) -> String {
    let source: Vec<String> = first_cell.iter().map(|l| format!("{}\n", l)).collect();
    serde_json::json!({
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": source},
            {"cell_type": "code", "metadata": {}, "source": ["from tqdm import tqdm\n"], "outputs": [], "execution_count": 1}
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 4
    })
    .to_string()
}

/// First cell of a well-formed post
pub const FIRST_CELL: &[&str] = &["# Simulating an outbreak", "date: 2020-03-15", "Intro text."];

/// Fake `nbconvert`: writes `<stem>.md` and `<stem>_files/` next to the
/// notebook (its last argument) and appends to `converter-calls.log` in the
/// notebook's parent directory.
pub const FAKE_CONVERTER: &str = r#"#!/bin/sh
for last in "$@"; do :; done
dir=$(dirname "$last")
stem=$(basename "$last" .ipynb)
echo "$last" >> "$dir/../converter-calls.log"
cat > "$dir/$stem.md" <<MD
# Simulating an outbreak

![map](images/map.png)

HBox(children=(FloatProgress(value=0.0, max=10.0), HTML(value='')))

![png](${stem}_files/${stem}_3_0.png)

<img src="${stem}_files/${stem}_5_0.svg">
MD
mkdir -p "$dir/${stem}_files"
printf 'png' > "$dir/${stem}_files/${stem}_3_0.png"
printf 'svg' > "$dir/${stem}_files/${stem}_5_0.svg"
"#;
