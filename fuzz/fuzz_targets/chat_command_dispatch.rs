#![no_main]

use libfuzzer_sys::fuzz_target;
use mtx_console_core::{
    is_blank_input, CommandDispatch, ConsoleLocale, ConsoleState, MessageKind,
};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let mut state = ConsoleState::new(ConsoleLocale::English, 200);
    state.set_username("fuzz");
    state.set_password("fuzz");
    assert!(state.submit_login().is_ok());

    let mut now_ms = 0_u64;
    let mut scheduled = 0_usize;
    for line in raw.lines() {
        let before = state.messages().len();
        state.set_command_input(line);
        match state.send_command(now_ms) {
            CommandDispatch::Ignored => {
                assert!(is_blank_input(line));
                assert_eq!(state.messages().len(), before);
            }
            CommandDispatch::Cleared => assert!(state.messages().is_empty()),
            CommandDispatch::Scheduled { due_at_ms } => {
                assert_eq!(due_at_ms, now_ms + 200);
                let last = state.messages().last().expect("command message");
                assert_eq!(last.kind, MessageKind::Command);
                assert_eq!(last.text, line);
                scheduled += 1;
            }
        }
        now_ms += 50;
    }

    let delivered = state.deliver_due(now_ms + 200);
    assert_eq!(delivered, scheduled);
    assert_eq!(state.pending_response_count(), 0);
});
