// tests/unit_graph.rs
//! Tests for import extraction across languages.

use impactmap_core::graph::imports;
use impactmap_core::lang::Lang;

#[test]
fn test_rust_use_extraction() {
    let content = r"
use std::collections::HashMap;
use crate::config::Config;
use super::types::Violation;
";
    let imports = imports::extract_path("src/lib.rs", content);
    assert_eq!(
        imports,
        vec!["std::collections::HashMap", "crate::config::Config", "super::types::Violation"]
    );
}

#[test]
fn test_rust_mod_extraction() {
    let content = r"
mod config;
mod analysis;
pub mod types;
pub(crate) mod internal;
";
    let imports = imports::extract_path("src/lib.rs", content);
    assert_eq!(imports, vec!["config", "analysis", "types", "internal"]);
}

#[test]
fn test_rust_multiline_group() {
    let content = r"
use crate::{
    graph::{builder, impact},
    types::RepoFile,
};
";
    let imports = imports::extract(Lang::Rust, content);
    assert_eq!(
        imports,
        vec!["crate::graph::builder", "crate::graph::impact", "crate::types::RepoFile"]
    );
}

#[test]
fn test_python_from_import() {
    let content = r"
from pathlib import Path
from typing import Optional, List
from .utils import helper
from . import (models, views)
";
    let imports = imports::extract_path("app/main.py", content);
    assert_eq!(imports, vec!["pathlib", "typing", ".utils", ".models", ".views"]);
}

#[test]
fn test_ts_import_forms() {
    let content = r"
import { useState } from 'react';
import axios from 'axios';
import * as utils from './utils';
import type { Props } from './types';
export { default as Button } from './Button';
const legacy = require('./legacy');
";
    let imports = imports::extract_path("src/app.tsx", content);
    assert_eq!(
        imports,
        vec!["react", "axios", "./utils", "./types", "./Button", "./legacy"]
    );
}

#[test]
fn test_dynamic_specifiers_are_skipped() {
    let content = r"
const mod = require(path.join(dir, name));
const lazy = import(`./pages/${page}`);
";
    assert!(imports::extract(Lang::EcmaScript, content).is_empty());
}

#[test]
fn test_go_block_import() {
    let content = r#"
package server

import (
	"net/http"

	log "github.com/sirupsen/logrus"
)
"#;
    let imports = imports::extract_path("server/server.go", content);
    assert_eq!(imports, vec!["net/http", "github.com/sirupsen/logrus"]);
}

#[test]
fn test_unsupported_extension_is_empty() {
    assert!(imports::extract_path("docs/guide.md", "import x from './y';").is_empty());
    assert!(imports::extract_path("Makefile", "include other.mk").is_empty());
}
