use std::{collections::HashMap, fmt};

use jspy::{
    config::Options,
    translator::session::{Host, Session},
};

#[derive(Debug)]
struct HostFailure(String);

impl fmt::Display for HostFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host failure: {}", self.0)
    }
}

impl std::error::Error for HostFailure {}

/// Records every program instead of running it.
#[derive(Default)]
struct RecordingHost {
    programs:  Vec<String>,
    namespace: HashMap<String, f64>,
    reject:    bool,
}

impl Host for RecordingHost {
    type Error = HostFailure;
    type Value = f64;

    fn execute(&mut self, program: &str) -> Result<(), Self::Error> {
        if self.reject {
            return Err(HostFailure("rejected".to_string()));
        }
        self.programs.push(program.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> Option<f64> {
        self.namespace.get(name).copied()
    }

    fn set(&mut self, name: &str, value: f64) {
        self.namespace.insert(name.to_string(), value);
    }
}

#[test]
fn eval_executes_everything_defined_so_far() {
    let mut session = Session::new(RecordingHost::default());

    let diagnostics = session.eval("function add(a, b) {\n    return a + b;\n}")
                             .expect("host failed");
    assert!(diagnostics.is_empty());

    session.eval("var total = add(1, 2)").expect("host failed");

    let programs = &session.host().programs;
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[0], "\ndef add(a, b):\n    return (a + b)\n\n");
    assert_eq!(programs[1], "total = add(1.0, 2.0)\n\ndef add(a, b):\n    return (a + b)\n\n");
}

#[test]
fn host_names_are_remapped() {
    let mut session = Session::new(RecordingHost::default());
    session.eval("var biggest = Math.max(a, Math.min(b, c))")
           .expect("host failed");

    assert_eq!(session.host().programs[0], "biggest = max(a, min(b, c))\n\n");
}

#[test]
fn parse_errors_are_returned_and_the_rest_still_runs() {
    let mut session = Session::new(RecordingHost::default());
    let diagnostics = session.eval("1 +\nvar x = 2").expect("host failed");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(session.host().programs[0], "x = 2.0\n\n");
}

#[test]
fn host_errors_propagate() {
    let host = RecordingHost { reject: true,
                               ..RecordingHost::default() };
    let mut session = Session::new(host);

    let error = session.eval("x = 1").expect_err("host should reject");
    assert_eq!(error.to_string(), "host failure: rejected");
}

#[test]
fn get_and_set_reach_the_host_namespace() {
    let mut session = Session::new(RecordingHost::default());

    session.set("bar", 20.0);
    session.set_all([("a".to_string(), 1.0), ("b".to_string(), 2.0)]);

    assert_eq!(session.get("bar"), Some(20.0));
    assert_eq!(session.get("b"), Some(2.0));
    assert_eq!(session.get("missing"), None);

    session.host_mut().namespace.clear();
    assert_eq!(session.get("bar"), None);
}

#[test]
fn options_shape_the_executed_program() {
    let options = Options { indent_width:         2,
                            global_function_name: "__main".to_string(),
                            ..Options::default() };
    let mut session = Session::with_options(RecordingHost::default(), options);
    session.eval("x = 1\nfunction f() { return x }").expect("host failed");

    assert_eq!(session.host().programs[0], "x = 1.0\n\ndef f():\n  return x\n\n");
    assert_eq!(session.context().globals[0].name(), "__main");
}
