//! Shared testing utilities for noetherian CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SOURCE: &str = r#"\documentclass{article}
\begin{document}
As shown in \cite{knuth84}.
\bibliographystyle{plain}
\bibliography{sample}
\end{document}
"#;

pub const BROKEN_SOURCE: &str = r#"\documentclass{article}
\begin{document}
\undefinedmacro
\end{document}
"#;

pub const BIB: &str = r#"@book{knuth84,
  author = {Donald E. Knuth},
  title = {The TeXbook},
  year = {1984}
}
"#;

/// Fake engine: writes .aux and .pdf into -output-directory, and reports a
/// fatal error for sources using `\undefinedmacro`.
const FAKE_ENGINE: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "__LOG__"
outdir=.
last=
for arg in "$@"; do
    case "$arg" in
        -output-directory=*) outdir="${arg#-output-directory=}" ;;
    esac
    last="$arg"
done
name="${last%.tex}"
echo "This is fakeTeX, Version 3.141592653"
if [ ! -f "$last" ]; then
    printf '%s\n' "! LaTeX Error: File \`$last' not found."
    exit 1
fi
if grep -q 'undefinedmacro' "$last"; then
    printf '%s\n' '! Undefined control sequence.' 'l.3 \undefinedmacro' '' 'No pages of output.'
    exit 1
fi
printf '%s\n' '\citation{knuth84}' > "$outdir/$name.aux"
if [ -f "$outdir/$name.bbl" ]; then
    cite='[1] D. E. Knuth, The TeXbook'
else
    cite='[?]'
fi
printf 'fake pdf: %s\n' "$cite" > "$outdir/$name.pdf"
echo "Output written on $outdir/$name.pdf (1 page)."
exit 0
"#;

/// Fake bibliography processor: needs `<name>.bib` and `<name>.aux` in its
/// working directory and writes `<name>.bbl`. `FAKE_BIBTEX_EXIT` sets the
/// exit code of a run that got that far, as bibtex exits 1 on warnings.
const FAKE_BIBTEX: &str = r#"#!/bin/sh
echo "bibtex $* cwd=$(pwd)" >> "__LOG__"
last=
for arg in "$@"; do
    last="$arg"
done
name="${last%.aux}"
if [ ! -f "$name.bib" ]; then
    echo "I couldn't open database file $name.bib"
    exit 2
fi
if [ ! -f "$last" ]; then
    echo "I couldn't open file name $last"
    exit 2
fi
printf '%s\n' '\bibitem{knuth84}' > "$name.bbl"
exit "${FAKE_BIBTEX_EXIT:-0}"
"#;

/// Isolated project directory with fake TeX tools on `PATH`.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with a sample document.
    pub fn new() -> Self {
        Self::with_source(SOURCE)
    }

    pub fn with_source(source: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("tools.log");

        let ctx = Self { root, work_dir, bin_dir, log_file };
        ctx.install_tool("pdflatex", FAKE_ENGINE);
        ctx.install_tool("lualatex", FAKE_ENGINE);
        ctx.install_tool("bibtex", FAKE_BIBTEX);
        ctx.write("sample.tex", source);
        ctx.write("sample.bib", BIB);
        ctx
    }

    fn install_tool(&self, name: &str, script: &str) {
        let path = self.bin_dir.join(name);
        let content = script.replace("__LOG__", &self.log_file.to_string_lossy());
        fs::write(&path, content).expect("Failed to write fake tool");

        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `noetherian` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("noetherian").expect("Failed to locate noetherian binary");
        let path = format!("{}:{}", self.bin_dir.display(), env::var("PATH").unwrap_or_default());
        cmd.current_dir(&self.work_dir).env("PATH", path).env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, relative: &str, content: &str) {
        fs::write(self.work_dir.join(relative), content).expect("Failed to write project file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read project file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// Tool invocations recorded by the fake tools, one per line.
    pub fn tool_log(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Program names from the tool log, in call order.
    pub fn tool_sequence(&self) -> Vec<String> {
        self.tool_log()
            .iter()
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    /// Project root entries, sorted.
    pub fn root_entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work dir")
            .map(|entry| entry.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries
    }
}
