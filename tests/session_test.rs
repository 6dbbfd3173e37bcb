mod common;

use anyhow::Result;
use common::run_script;
use gradebook::cli::Session;
use gradebook::domain::Grade;
use std::io::Cursor;

#[test]
fn test_add_list_and_gpa() -> Result<()> {
    let (session, output) = run_script("add A Math\nadd B Physics\nadd W Latin\nlist\ngpa\n")?;

    assert!(output.contains("Added: Math (A)"));
    assert!(output.contains("1. Math (A)"));
    assert!(output.contains("3. Latin (W)"));
    assert!(output.contains("GPA: 3.50"));
    assert_eq!(session.service().ledger().len(), 3);

    Ok(())
}

#[test]
fn test_blank_name_is_ignored() -> Result<()> {
    let (session, output) = run_script("add A    \nlist\n")?;

    assert!(output.contains("Course name is empty; nothing added."));
    assert!(output.contains("No courses yet."));
    assert!(session.service().ledger().is_empty());

    Ok(())
}

#[test]
fn test_remove_by_position_and_unknown_id() -> Result<()> {
    let (session, output) = run_script("add A Math\nadd C Art\nadd B Music\nremove 2\n")?;
    assert!(output.contains("Removed: Art (C)"));

    let ledger = session.service().ledger();
    let names: Vec<&str> = ledger.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Math", "Music"]);

    let id = ledger.entries()[0].id;
    let (_, output) = run_script(&format!("add A Math\nremove {}\n", id))?;
    assert!(output.contains("No such course; nothing removed."));

    Ok(())
}

#[test]
fn test_errors_do_not_end_session() -> Result<()> {
    let (session, output) =
        run_script("add Q Math\nremove 5\nfrobnicate\nadd b+ Math\ngpa\n")?;

    assert!(output.contains("Error: Invalid grade: unknown grade 'Q'"));
    assert!(output.contains("Error: No course at position 5 (the list has 0)"));
    assert!(output.contains("Error: Unknown command: frobnicate"));
    assert!(output.contains("GPA: 3.50"));
    assert_eq!(session.service().ledger().entries()[0].grade, Grade::BPlus);

    Ok(())
}

#[test]
fn test_quit_stops_reading() -> Result<()> {
    let (session, output) = run_script("add A Math\nquit\nadd B Physics\n")?;

    assert_eq!(session.service().ledger().len(), 1);
    assert!(!output.contains("Physics"));

    Ok(())
}

#[test]
fn test_only_withdrawn_gpa_is_zero() -> Result<()> {
    let (_, output) = run_script("add W Latin\nadd W Greek\ngpa\n")?;
    assert!(output.contains("GPA: 0.00"));
    Ok(())
}

#[test]
fn test_failing_entry_listed() -> Result<()> {
    let (_, output) = run_script("add F Calculus\nlist\n")?;
    assert!(output.contains("Calculus (F)"));
    Ok(())
}

#[test]
fn test_report_and_clear() -> Result<()> {
    let (session, output) =
        run_script("add A Math\nadd A Physics\nadd F Art\nreport\nreport csv\nclear\ngpa\n")?;

    assert!(output.contains("COURSE"));
    assert!(output.contains("GPA: 2.67"));
    assert!(output.contains("(3 counted, 0 withdrawn)"));
    assert!(output.contains("id,name,grade,points,counted"));
    assert!(output.contains(",Art,F,0.0,true"));
    assert!(output.contains("Cleared 3 course(s)."));
    assert!(output.contains("GPA: 0.00"));
    assert!(session.service().ledger().is_empty());

    Ok(())
}

#[test]
fn test_grades_and_help() -> Result<()> {
    let (_, output) = run_script("grades\nhelp\n")?;

    assert!(output.contains("GRADE"));
    assert!(output.contains("W (withdrawn) is excluded from the average."));
    assert!(output.contains("add <grade> <name>"));

    Ok(())
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() -> Result<()> {
    let mut session = Session::new();
    let mut output = Vec::new();
    let input: &[u8] = b"add A Math\n\xff\xfe\nadd B Physics\ngpa\n";

    session.run(Cursor::new(input), &mut output)?;

    let output = String::from_utf8(output)?;
    assert!(output.contains("Error: input line is not valid UTF-8; ignored"));
    assert!(output.contains("Added: Physics (B)"));
    assert!(output.contains("GPA: 3.50"));
    assert_eq!(session.service().ledger().len(), 2);

    Ok(())
}

#[test]
fn test_remove_live_entry_by_id() -> Result<()> {
    let (mut session, _) = run_script("add A Math\nadd C Art\n")?;
    let art = session.service().ledger().entries()[1].id;

    let mut output = Vec::new();
    session.run(Cursor::new(format!("remove {}\nlist\n", art)), &mut output)?;

    let output = String::from_utf8(output)?;
    assert!(output.contains("Removed: Art (C)"));
    assert!(output.contains("1. Math (A)"));
    assert!(!session.service().ledger().contains(art));
    assert_eq!(session.service().ledger().len(), 1);

    Ok(())
}
