//! Scripted stand-in for the typesetting engine and bibliography processor.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AppError, ExitState, ToolInvocation, ToolOutput};
use crate::ports::ToolRunner;

/// Source content that makes the fake engine report a fatal error.
pub const BROKEN_MACRO: &str = "\\undefinedmacro";

/// Fake toolchain that mimics engine and bibliography processor file effects.
///
/// The engine writes `<name>.aux` and `<name>.pdf` into its output
/// directory. The PDF carries a resolved citation only when a `.bbl` from a
/// previous bibliography pass is present. A source containing
/// [`BROKEN_MACRO`] yields a fatal diagnostic and no PDF. A bibliography
/// exit code above 1 leaves no `.bbl` behind.
#[derive(Default)]
pub struct FakeToolRunner {
    pub invocations: Mutex<Vec<ToolInvocation>>,
    /// Whether the staged `.bib` was next to the `.aux` at each bibliography pass.
    pub bibliography_seen: Mutex<Vec<bool>>,
    bibliography_program: String,
    unavailable: Vec<String>,
    bibliography_exit: i32,
}

#[allow(dead_code)]
impl FakeToolRunner {
    pub fn new() -> Self {
        Self { bibliography_program: "bibtex".to_string(), ..Self::default() }
    }

    /// Make spawning `program` fail as if it were not installed.
    pub fn with_unavailable(mut self, program: &str) -> Self {
        self.unavailable.push(program.to_string());
        self
    }

    /// Exit code reported by the bibliography processor.
    pub fn with_bibliography_exit(mut self, code: i32) -> Self {
        self.bibliography_exit = code;
        self
    }

    pub fn calls(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.program).collect()
    }

    fn run_engine(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        let output_dir = invocation
            .args
            .iter()
            .find_map(|arg| arg.strip_prefix("-output-directory="))
            .unwrap_or(".");
        let source = invocation.args.last().cloned().unwrap_or_default();
        let stem = source.trim_end_matches(".tex");
        let out = invocation.working_dir.join(output_dir);

        let Ok(content) = fs::read_to_string(invocation.working_dir.join(&source)) else {
            return Ok(fatal(&format!("! LaTeX Error: File `{}' not found.", source)));
        };
        if content.contains(BROKEN_MACRO) {
            return Ok(fatal(&format!("! Undefined control sequence.\nl.3 {}", BROKEN_MACRO)));
        }

        fs::write(out.join(format!("{}.aux", stem)), "\\citation{knuth84}\n")?;
        let citation = if out.join(format!("{}.bbl", stem)).exists() { "[1]" } else { "[?]" };
        fs::write(out.join(format!("{}.pdf", stem)), format!("%PDF fake cite {}", citation))?;

        Ok(ToolOutput {
            status: ExitState { code: Some(0) },
            stdout: format!("Output written on {}/{}.pdf (1 page).\n", output_dir, stem),
        })
    }

    fn run_bibliography(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        let aux = invocation.args.last().cloned().unwrap_or_default();
        let stem = aux.trim_end_matches(".aux");
        let dir = invocation.working_dir.as_path();

        let bib_present = dir.join(format!("{}.bib", stem)).exists();
        self.bibliography_seen.lock().unwrap().push(bib_present);

        // Exit 1 means warnings only; the .bbl is still written.
        if self.bibliography_exit <= 1 && bib_present && dir.join(&aux).exists() {
            fs::write(dir.join(format!("{}.bbl", stem)), "\\bibitem{knuth84}\n")?;
        }
        Ok(ToolOutput { status: ExitState { code: Some(self.bibliography_exit) }, stdout: String::new() })
    }
}

fn fatal(text: &str) -> ToolOutput {
    ToolOutput { status: ExitState { code: Some(1) }, stdout: format!("This is fakeTeX\n{}\n", text) }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.unavailable.iter().any(|program| program == &invocation.program) {
            return Err(AppError::ToolSpawn {
                program: invocation.program.clone(),
                details: "No such file or directory (os error 2)".to_string(),
            });
        }

        if Path::new(&invocation.program) == Path::new(&self.bibliography_program) {
            self.run_bibliography(invocation)
        } else {
            self.run_engine(invocation)
        }
    }
}
