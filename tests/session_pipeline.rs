//! Full-pipeline scenarios: checks through a session into the built-in and
//! recording sinks.

use std::fs;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use unit_test_helper::check::counter::Counter;
use unit_test_helper::check::verbosity::Verbosity;
use unit_test_helper::core::config::Config;
use unit_test_helper::report::callback::CallbackSink;
use unit_test_helper::report::console::ConsoleSink;
use unit_test_helper::report::memory::MemorySink;
use unit_test_helper::report::record::Record;
use unit_test_helper::session::{FailurePolicy, Session};
use unit_test_helper::{uth_eq, uth_group};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

#[test]
fn suite_scenario_console_transcript() {
    let out = Captured::default();
    let mut session = Session::builder()
        .seed(11)
        .output(ConsoleSink::with_writer(Box::new(out.clone()), false))
        .build();

    session.begin_group("suite");
    let pass_line = line!() + 1;
    assert!(session.check_eq("4", &4, "4", &4));
    let fail_line = line!() + 1;
    assert!(!session.check_eq("4", &4, "5", &5));
    let suite = session.end_group();
    let outcome = session.finish();

    assert_eq!(suite.name, "suite");
    assert!(suite.local_failed);
    assert_eq!(
        suite.counter,
        Counter {
            success: 1,
            failure: 1
        }
    );
    assert_eq!(outcome.exit_code, 1);

    let expected = format!(
        "[UTH] Init Rand seed: 11\n\
         [UTH] Group:\tsuite\n\
         \t[UTH] Success equals(4, 4) -- session_pipeline.rs:{pass_line}\n\
         \t[UTH] Failure equals(4, 5) -- session_pipeline.rs:{fail_line}\n\
         \t4:\n\
         \t4\n\
         \t5:\n\
         \t5\n\
         \t[UTH] Group:\tsuite run: 2 (1/1) and exit with code: EXIT_FAILURE (1)\n\
         [UTH] Run: 2 (1/1) in 1 (0/1) groups and exit with code: EXIT_FAILURE (1)\n"
    );
    assert_eq!(out.text(), expected);
}

#[test]
fn silent_verbosity_prints_only_init_and_summary() {
    let out = Captured::default();
    let mut session = Session::builder()
        .seed(2)
        .verbosity(Verbosity::NONE)
        .output(ConsoleSink::with_writer(Box::new(out.clone()), false))
        .build();

    session.begin_group("quiet");
    for i in 0..5 {
        session.check("passes", i >= 0);
    }
    session.end_group();
    let outcome = session.finish();

    assert!(outcome.is_success());
    assert_eq!(outcome.checks.success, 5);
    assert_eq!(
        out.text(),
        "[UTH] Init Rand seed: 2\n[UTH] Run: 5 and exit with code: EXIT_SUCCESS (0)\n"
    );
}

#[test]
fn param_names_suppressed_but_values_kept() {
    let memory = MemorySink::new();
    let out = Captured::default();
    let mut session = Session::builder()
        .seed(0)
        .verbosity(Verbosity::PARAMS_FAILURE)
        .output(ConsoleSink::with_writer(Box::new(out.clone()), false))
        .listener(memory.clone())
        .build();

    session.check_with("a > b", false, "a, b", &[&1, &2]);

    assert!(out.text().contains("\n1\n2\n"), "{}", out.text());
    assert!(!out.text().contains("a:"), "{}", out.text());
    let params = memory.records().into_iter().find_map(|r| match r {
        Record::Params { params, .. } => Some(params),
        _ => None,
    });
    assert_eq!(params.map(|p| p.len()), Some(2));
}

#[test]
fn listener_sees_nested_groups_in_order() {
    let memory = MemorySink::new();
    let mut session = Session::builder()
        .seed(0)
        .verbosity(Verbosity::NONE)
        .listener(memory.clone())
        .build();

    uth_group!(session, "outer", {
        uth_group!(session, "inner", {
            uth_eq!(session, 1, 2);
        });
    });
    session.finish();

    let groups: Vec<(String, String, usize)> = memory
        .records()
        .into_iter()
        .filter_map(|r| match r {
            Record::GroupBegin { name, depth } => Some(("begin".to_string(), name, depth)),
            Record::GroupEnd { group, depth } => Some(("end".to_string(), group.name, depth)),
            _ => None,
        })
        .collect();
    assert_eq!(
        groups,
        vec![
            ("begin".to_string(), "outer".to_string(), 1),
            ("begin".to_string(), "inner".to_string(), 2),
            ("end".to_string(), "inner".to_string(), 2),
            ("end".to_string(), "outer".to_string(), 1),
        ]
    );

    let outer = memory.records().into_iter().find_map(|r| match r {
        Record::GroupEnd { group, .. } if group.name == "outer" => Some(group),
        _ => None,
    });
    let outer = outer.unwrap();
    assert!(outer.local_failed);
    assert_eq!(outer.counter.failure, 1);
}

#[test]
fn callbacks_read_user_data_and_outcome() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let on_end = Arc::clone(&seen);
    let on_finish = Arc::clone(&seen);
    let mut session = Session::builder()
        .seed(0)
        .verbosity(Verbosity::NONE)
        .user_data(42_u32)
        .listener(
            CallbackSink::new()
                .with_group_end(move |ctx, group| {
                    let tag = ctx.user_data::<u32>().copied().unwrap_or_default();
                    on_end.lock().push(format!("{tag}:{}:{}", group.name, group.exit_code()));
                })
                .with_finish(move |_, outcome| {
                    on_finish.lock().push(format!("finish:{}", outcome.exit_code));
                }),
        )
        .build();

    session.group("ok", |s| s.check("t", true));
    session.group("bad", |s| s.check("f", false));
    session.finish();

    assert_eq!(*seen.lock(), vec!["42:ok:0", "42:bad:1", "finish:1"]);
}

#[test]
fn sticky_failure_survives_later_passes() {
    let mut session = Session::builder().seed(0).build();
    session.check("first", false);
    for _ in 0..10 {
        session.check("later", true);
    }
    assert_eq!(session.finish().exit_code, 1);
}

#[test]
fn file_outputs_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let jsonl = dir.path().join("events").join("run.jsonl");
    let mut config = Config::default();
    config.output.console = false;
    config.output.text_file = true;
    config.output.log_dir = dir.path().join("Logs");
    config.output.jsonl = Some(jsonl.clone());
    config.run.seed = Some(123);

    let mut session = Session::from_config(&config);
    assert_eq!(session.failure_policy(), FailurePolicy::Continue);
    assert_eq!(session.seed(), 123);
    session.group("files", |s| {
        s.check_eq("x", &1, "y", &2);
    });
    session.finish();
    drop(session);

    let logs: Vec<_> = fs::read_dir(dir.path().join("Logs"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);
    let text = fs::read_to_string(&logs[0]).unwrap();
    assert!(text.starts_with("[UTH] Init Rand seed: 123\n"), "{text}");
    assert!(text.contains("\t[UTH] Failure equals(x, y) -- session_pipeline.rs:"));
    assert!(text.contains("exit with code: EXIT_FAILURE (1)"));

    let events: Vec<String> = fs::read_to_string(&jsonl)
        .unwrap()
        .lines()
        .map(|line| {
            let v: Value = serde_json::from_str(line).unwrap();
            v["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        events,
        vec![
            "init",
            "group_begin",
            "title",
            "params",
            "result",
            "group_end",
            "finish"
        ]
    );
}

#[test]
fn mismatched_labels_fail_loudly() {
    let result = std::panic::catch_unwind(|| {
        let mut session = Session::builder().seed(0).build();
        session.check_with("x", true, "a, b, c", &[&1, &2]);
    });
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "UTH-2001")]
fn end_without_begin_fails_loudly() {
    let mut session = Session::builder().seed(0).build();
    session.end_group();
}
