use std::ffi::{CStr, CString, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;

use libc::{c_char, c_int, pid_t};

use super::{signal, ProcessError};
use crate::parse::{strip_control, CommandStatus, OutputMode};

/// Exit status of a child whose program image could not be replaced.
pub const EXEC_FAILURE_STATUS: c_int = 127;
/// Exit status of a child whose stdin/stdout redirection could not be opened.
pub const REDIRECT_FAILURE_STATUS: c_int = 1;

extern "C" {
    static mut environ: *const *const c_char;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Exited(i32),
    Signaled(i32),
    /// The kernel reaped the child before its status could be collected.
    Reaped,
    Background(pid_t),
}

#[derive(Debug, Clone, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    /// Forks and execs `args` with the redirections in `status`. Control
    /// tokens and everything after the first of them never reach the
    /// child's argument vector.
    pub fn launch(
        &self,
        args: &[String],
        status: &CommandStatus,
    ) -> Result<LaunchOutcome, ProcessError> {
        let args = strip_control(args);
        if args.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }

        // Everything the child touches is allocated here, before fork.
        let plan = ExecPlan::prepare(args, status)?;

        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => unsafe { plan.exec_child() },
            pid => {
                log::debug!(
                    "spawned {} as pid {} ({})",
                    args[0],
                    pid,
                    if status.foreground { "foreground" } else { "background" }
                );
                if status.foreground {
                    wait_foreground(pid)
                } else {
                    poll_background(pid)
                }
            }
        }
    }
}

struct ExecPlan {
    _argv: Vec<CString>,
    argv_ptrs: Vec<*const c_char>,
    _envp: Vec<CString>,
    envp_ptrs: Vec<*const c_char>,
    input: Option<CString>,
    output: Option<(CString, c_int)>,
    exec_diag: Vec<u8>,
    input_diag: Vec<u8>,
    output_diag: Vec<u8>,
}

impl ExecPlan {
    fn prepare(args: &[String], status: &CommandStatus) -> Result<Self, ProcessError> {
        let argv = args
            .iter()
            .map(|arg| cstring(arg.as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;
        let argv_ptrs = null_terminated(&argv);

        let mut envp = Vec::new();
        for (key, value) in std::env::vars_os() {
            if key == "PARENT" {
                continue;
            }
            envp.push(env_entry(&key, &value)?);
        }
        envp.push(env_entry(
            OsStr::new("PARENT"),
            status.shell_path.as_os_str(),
        )?);
        let envp_ptrs = null_terminated(&envp);

        let input = status
            .input
            .as_ref()
            .map(|path| cstring(path.as_os_str().as_bytes()))
            .transpose()?;
        let output = status
            .output
            .as_ref()
            .map(|redirect| {
                let flags = match redirect.mode {
                    OutputMode::Truncate => libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC,
                    OutputMode::Append => libc::O_WRONLY | libc::O_CREAT | libc::O_APPEND,
                };
                cstring(redirect.path.as_os_str().as_bytes()).map(|path| (path, flags))
            })
            .transpose()?;

        let exec_diag = format!("myshell: exec failed - {}: ", args[0]).into_bytes();
        let input_diag = status
            .input
            .as_ref()
            .map(|path| format!("myshell: cannot open {} for reading: ", path.display()))
            .unwrap_or_default()
            .into_bytes();
        let output_diag = status
            .output
            .as_ref()
            .map(|redirect| {
                format!("myshell: cannot open {} for writing: ", redirect.path.display())
            })
            .unwrap_or_default()
            .into_bytes();

        Ok(Self {
            _argv: argv,
            argv_ptrs,
            _envp: envp,
            envp_ptrs,
            input,
            output,
            exec_diag,
            input_diag,
            output_diag,
        })
    }

    /// Runs in the forked child. Never returns to the caller: either the
    /// program image is replaced or the child exits.
    unsafe fn exec_child(&self) -> ! {
        signal::restore_defaults();

        if let Some(path) = &self.input {
            if !redirect(path, libc::O_RDONLY, libc::STDIN_FILENO) {
                fail(&self.input_diag, REDIRECT_FAILURE_STATUS);
            }
        }
        if let Some((path, flags)) = &self.output {
            if !redirect(path, *flags, libc::STDOUT_FILENO) {
                fail(&self.output_diag, REDIRECT_FAILURE_STATUS);
            }
        }

        environ = self.envp_ptrs.as_ptr();
        libc::execvp(self.argv_ptrs[0], self.argv_ptrs.as_ptr());
        fail(&self.exec_diag, EXEC_FAILURE_STATUS)
    }
}

fn cstring(bytes: &[u8]) -> Result<CString, ProcessError> {
    CString::new(bytes)
        .map_err(|_| ProcessError::InvalidArgument(String::from_utf8_lossy(bytes).into_owned()))
}

fn env_entry(key: &OsStr, value: &OsStr) -> Result<CString, ProcessError> {
    let mut entry = key.as_bytes().to_vec();
    entry.push(b'=');
    entry.extend_from_slice(value.as_bytes());
    cstring(&entry)
}

fn null_terminated(strings: &[CString]) -> Vec<*const c_char> {
    strings
        .iter()
        .map(|s| s.as_ptr())
        .chain(std::iter::once(std::ptr::null()))
        .collect()
}

unsafe fn redirect(path: &CStr, flags: c_int, target: c_int) -> bool {
    let fd = libc::open(path.as_ptr(), flags, 0o666 as libc::c_uint);
    if fd < 0 {
        return false;
    }
    if fd == target {
        return true;
    }
    let duplicated = libc::dup2(fd, target) >= 0;
    libc::close(fd);
    duplicated
}

unsafe fn fail(prefix: &[u8], status: c_int) -> ! {
    let reason = errno_text(io::Error::last_os_error().raw_os_error());
    write_stderr(prefix);
    write_stderr(reason.as_bytes());
    write_stderr(b"\n");
    libc::_exit(status)
}

unsafe fn write_stderr(bytes: &[u8]) {
    libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
}

// Static strings only: the child may not allocate after fork.
fn errno_text(errno: Option<i32>) -> &'static str {
    match errno {
        Some(libc::ENOENT) => "No such file or directory",
        Some(libc::EACCES) => "Permission denied",
        Some(libc::ENOEXEC) => "Exec format error",
        Some(libc::ENOTDIR) => "Not a directory",
        Some(libc::EISDIR) => "Is a directory",
        Some(libc::ELOOP) => "Too many levels of symbolic links",
        Some(libc::ENAMETOOLONG) => "File name too long",
        Some(libc::ENOMEM) => "Cannot allocate memory",
        _ => "Unknown error",
    }
}

fn wait_foreground(pid: pid_t) -> Result<LaunchOutcome, ProcessError> {
    let mut raw: c_int = 0;
    loop {
        let ret = unsafe { libc::waitpid(pid, &mut raw, 0) };
        if ret == pid {
            let outcome = decode_wait_status(raw);
            log::debug!("pid {} finished: {:?}", pid, outcome);
            return Ok(outcome);
        }
        let err = io::Error::last_os_error();
        match err.raw_os_error() {
            Some(libc::EINTR) => continue,
            // SIGCHLD is ignored, so the kernel already collected the child.
            Some(libc::ECHILD) => return Ok(LaunchOutcome::Reaped),
            _ => return Err(ProcessError::Wait(err)),
        }
    }
}

fn poll_background(pid: pid_t) -> Result<LaunchOutcome, ProcessError> {
    let mut raw: c_int = 0;
    let ret = unsafe { libc::waitpid(pid, &mut raw, libc::WNOHANG) };
    if ret == pid {
        log::debug!(
            "background pid {} already finished: {:?}",
            pid,
            decode_wait_status(raw)
        );
    }
    Ok(LaunchOutcome::Background(pid))
}

fn decode_wait_status(raw: c_int) -> LaunchOutcome {
    if libc::WIFEXITED(raw) {
        LaunchOutcome::Exited(libc::WEXITSTATUS(raw))
    } else if libc::WIFSIGNALED(raw) {
        LaunchOutcome::Signaled(libc::WTERMSIG(raw))
    } else {
        LaunchOutcome::Reaped
    }
}
