//! Exit handling: signal handlers, terminal cleanup, and core dump suppression.

/// Put the tty back into cooked mode using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Escape codes only when stdout is a tty, never into a pipe
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, b"\x1b[0m\x1b[?25h".as_ptr() as *const libc::c_void, 10);
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core files.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    #[cfg(not(target_os = "linux"))]
    unsafe {
        let limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        libc::setrlimit(libc::RLIMIT_CORE, &limit);
    }
}
