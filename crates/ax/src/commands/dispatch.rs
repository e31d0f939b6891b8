//! Dispatch `ax <name> [args...]` to a workspace command

use std::{ffi::OsString, path::Path};

use ax_core::{
    exit_code, resolve, CommandContract, Error, InvocationContext, Loader, Result, TopLevelOption,
};

/// Resolve `name` from `cwd`, then run its `help` (when the first argument
/// is `-?`) or its `main` with `args`.
///
/// Returns the exit code to terminate with. `main`'s code is passed through
/// unchanged; a failing `help` still exits with success.
pub fn run<L: Loader>(loader: &L, cwd: &Path, name: &str, args: &[OsString]) -> Result<i32> {
    let resolution = resolve(cwd, Some(name)).ok_or_else(|| Error::NotAWorkspace {
        start: cwd.to_path_buf(),
    })?;
    let script = resolution
        .command
        .as_deref()
        .and_then(|n| resolution.workspace.command_script(n))
        .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;

    let context = InvocationContext::new(&resolution.workspace, name);
    tracing::debug!(command = %context.command, root = %context.root.display(), "dispatching");
    let command = loader.load(&script, context);

    if args.first().is_some_and(|a| a == TopLevelOption::Help.flag()) {
        if let Err(e) = command.help() {
            tracing::debug!(command = %name, error = %e, "help failed");
        }
        return Ok(exit_code::SUCCESS);
    }

    command.main(args)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs, rc::Rc};

    use ax_core::workspace::MARKER_DIR;
    use tempfile::TempDir;

    use super::*;

    #[derive(Default)]
    struct Calls {
        help: usize,
        main: Vec<Vec<OsString>>,
        context: Option<InvocationContext>,
    }

    struct Recording {
        calls: Rc<RefCell<Calls>>,
        help_fails: bool,
        code: i32,
    }

    impl CommandContract for Recording {
        fn info(&self) -> Result<Option<String>> {
            Ok(None)
        }
        fn help(&self) -> Result<()> {
            self.calls.borrow_mut().help += 1;
            if self.help_fails {
                return Err(Error::CommandFailure {
                    name: "x".into(),
                    reason: "help broke".into(),
                });
            }
            Ok(())
        }
        fn list(&self, _args: &[String]) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
        fn main(&self, args: &[OsString]) -> Result<i32> {
            self.calls.borrow_mut().main.push(args.to_vec());
            Ok(self.code)
        }
    }

    struct RecordingLoader {
        calls: Rc<RefCell<Calls>>,
        help_fails: bool,
        code: i32,
    }

    impl RecordingLoader {
        fn new(code: i32, help_fails: bool) -> Self {
            Self {
                calls: Rc::default(),
                help_fails,
                code,
            }
        }
    }

    impl Loader for RecordingLoader {
        type Command = Recording;

        fn load(&self, _script: &Path, context: InvocationContext) -> Recording {
            self.calls.borrow_mut().context = Some(context);
            Recording {
                calls: Rc::clone(&self.calls),
                help_fails: self.help_fails,
                code: self.code,
            }
        }
    }

    fn workspace() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let marker = tmp.path().join(MARKER_DIR);
        fs::create_dir_all(&marker).unwrap();
        fs::write(marker.join("build.sh"), "").unwrap();
        fs::write(marker.join(".secret.sh"), "").unwrap();
        fs::create_dir_all(tmp.path().join("sub/dir")).unwrap();
        tmp
    }

    fn args(a: &[&str]) -> Vec<OsString> {
        a.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_main_receives_args_and_code_is_forwarded() {
        let tmp = workspace();
        let loader = RecordingLoader::new(7, false);
        let cwd = tmp.path().join("sub/dir");

        let code = run(&loader, &cwd, "build", &args(&["a", "--b"])).unwrap();
        assert_eq!(code, 7);

        let calls = loader.calls.borrow();
        assert_eq!(calls.main, vec![args(&["a", "--b"])]);
        let ctx = calls.context.as_ref().unwrap();
        assert_eq!(ctx.root, tmp.path());
        assert_eq!(ctx.marker, tmp.path().join(MARKER_DIR));
        assert_eq!(ctx.command, "build");
    }

    #[test]
    fn test_help_flag_skips_main() {
        let tmp = workspace();
        let loader = RecordingLoader::new(9, false);

        let code = run(&loader, tmp.path(), "build", &args(&["-?", "ignored"])).unwrap();
        assert_eq!(code, 0);
        assert_eq!(loader.calls.borrow().help, 1);
        assert!(loader.calls.borrow().main.is_empty());
    }

    #[test]
    fn test_failing_help_still_succeeds() {
        let tmp = workspace();
        let loader = RecordingLoader::new(0, true);
        assert_eq!(run(&loader, tmp.path(), "build", &args(&["-?"])).unwrap(), 0);
    }

    #[test]
    fn test_help_flag_later_is_passed_to_main() {
        let tmp = workspace();
        let loader = RecordingLoader::new(0, false);
        run(&loader, tmp.path(), "build", &args(&["x", "-?"])).unwrap();
        assert_eq!(loader.calls.borrow().help, 0);
        assert_eq!(loader.calls.borrow().main, vec![args(&["x", "-?"])]);
    }

    #[test]
    fn test_unknown_and_hidden_commands() {
        let tmp = workspace();
        let loader = RecordingLoader::new(0, false);

        for name in ["deploy", ".secret", "secret"] {
            let err = run(&loader, tmp.path(), name, &[]).unwrap_err();
            assert!(matches!(err, Error::UnknownCommand(_)), "{name}");
            assert_eq!(err.exit_code(), 22);
        }
        assert!(loader.calls.borrow().context.is_none());
    }

    #[test]
    fn test_outside_workspace() {
        let tmp = TempDir::new().unwrap();
        let loader = RecordingLoader::new(0, false);

        let err = run(&loader, tmp.path(), "anything", &[]).unwrap_err();
        assert!(matches!(err, Error::NotAWorkspace { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
