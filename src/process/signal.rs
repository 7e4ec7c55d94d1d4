use libc::{sighandler_t, signal, SIG_DFL, SIG_ERR, SIG_IGN};
use signal_hook::consts::signal::{SIGCHLD, SIGINT};

use crate::process::ProcessError;

/// Ignores keyboard interrupts and child-termination notices for the
/// lifetime of the shell. With `SIGCHLD` ignored the kernel reaps exited
/// children, so background jobs never linger as zombies.
pub fn suppress_for_shell() -> Result<(), ProcessError> {
    for signum in [SIGINT, SIGCHLD] {
        set_disposition(signum, SIG_IGN)?;
    }
    log::debug!("SIGINT and SIGCHLD ignored for the shell process");
    Ok(())
}

fn set_disposition(signum: libc::c_int, handler: sighandler_t) -> Result<(), ProcessError> {
    let previous = unsafe { signal(signum, handler) };
    if previous == SIG_ERR {
        return Err(ProcessError::Signal(std::io::Error::last_os_error()));
    }
    Ok(())
}

/// Puts `SIGINT` and `SIGCHLD` back to their default actions.
///
/// # Safety
///
/// Only called in a freshly forked child before exec; it performs nothing
/// but async-signal-safe `signal(2)` calls.
pub(crate) unsafe fn restore_defaults() {
    signal(SIGINT, SIG_DFL);
    signal(SIGCHLD, SIG_DFL);
}
