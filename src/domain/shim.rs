//! Shim script generation for installed commands.
//!
//! Pure text rendering: given a module specifier, the runtime flags to bake
//! in, and a target platform, produce the wrapper script bodies the
//! installer persists. No I/O happens here and inputs are embedded verbatim.

/// Executable name of the module runtime the generated shims defer to.
const RUNTIME_EXE: &str = "lode";

/// Header embedded in every generated script.
const DISCLAIMER: &str =
    "This executable is generated by lode. Please don't modify it unless you know what it means.";

/// Target platform for shim generation.
///
/// Passed explicitly so Windows artifacts can be generated (and tested) on a
/// POSIX host and vice versa; ambient detection happens only at the
/// library/CLI boundary via [`Platform::host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Platform of the running host.
    pub fn host() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Posix }
    }
}

/// Rendered shim bodies for one install call.
///
/// The POSIX body is always produced; the batch body only for the Windows
/// target. Both embed the identical invocation line, so the two on-disk
/// variants of a command can never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimScripts {
    pub posix: String,
    pub windows: Option<String>,
}

impl ShimScripts {
    /// Render the shim bodies around `run <flags...> <module specifier>`.
    ///
    /// Flags are joined with single spaces in caller order; they are
    /// positional runtime arguments, never reordered or deduplicated.
    pub fn generate(module_specifier: &str, flags: &[String], platform: Platform) -> Self {
        let invocation = invocation_line(module_specifier, flags);

        let windows = match platform {
            Platform::Windows => Some(windows_body(&invocation)),
            Platform::Posix => None,
        };

        Self { posix: posix_body(&invocation), windows }
    }
}

fn invocation_line(module_specifier: &str, flags: &[String]) -> String {
    let mut parts = Vec::with_capacity(flags.len() + 2);
    parts.push("run");
    parts.extend(flags.iter().map(String::as_str));
    parts.push(module_specifier);
    parts.join(" ")
}

/// Shebang script preferring a runtime adjacent to the shim itself.
///
/// The `sed` pass normalizes backslash separators before `dirname` so the
/// self-directory lookup survives Windows-style paths, and a Cygwin
/// environment gets the directory translated through `cygpath`.
fn posix_body(invocation: &str) -> String {
    format!(
        r#"#!/bin/sh
# {DISCLAIMER}
basedir=$(dirname "$(echo "$0" | sed -e 's,\\,/,g')")

case `uname` in
    *CYGWIN*) basedir=`cygpath -w "$basedir"`;;
esac

if [ -x "$basedir/{RUNTIME_EXE}" ]; then
  "$basedir/{RUNTIME_EXE}" {invocation} "$@"
  ret=$?
else
  {RUNTIME_EXE} {invocation} "$@"
  ret=$?
fi
exit $ret
"#
    )
}

/// Batch script with the equivalent adjacent-runtime preference.
///
/// The fallback branch strips `;.TS;` from `PATHEXT` inside a `SETLOCAL`
/// block so the bare runtime lookup cannot resolve to a module file; cmd.exe
/// propagates the tail command's exit code on its own.
fn windows_body(invocation: &str) -> String {
    format!(
        r#"% {DISCLAIMER} %
@IF EXIST "%~dp0\{RUNTIME_EXE}.exe" (
  "%~dp0\{RUNTIME_EXE}.exe" {invocation} %*
) ELSE (
  @SETLOCAL
  @SET PATHEXT=%PATHEXT:;.TS;=;%
  {RUNTIME_EXE} {invocation} %*
)
"#
    )
}
