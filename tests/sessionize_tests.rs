mod common;
use common::{GRID, WALL, ds_with, stdout_of, write_fixture};

#[test]
fn test_sessionize_grid_agenda() {
    let input = write_fixture("sessionize_grid", GRID);

    let out = stdout_of(ds_with("sessionize_grid", &input).args(["--input-format", "sessionize", "agenda"]));

    assert!(out.contains("Miércoles, 9 oct"));
    assert!(out.contains("Bienvenida"));
    assert!(out.contains("Auditorio"));
    assert!(out.contains("Aula 1"));
    assert!(out.find("Bienvenida") < out.find("Keynote"));
    assert!(out.find("Keynote") < out.find("Kotlin"));
    // Without a speaker wall the grid's inline names are used.
    assert!(out.contains("Ana"));
    assert!(!out.contains("Ana Pérez"));
}

#[test]
fn test_sessionize_with_speaker_wall() {
    let input = write_fixture("sessionize_wall_grid", GRID);
    let wall = write_fixture("sessionize_wall_speakers", WALL);

    let out = stdout_of(ds_with("sessionize_wall", &input).args([
        "--input-format",
        "sessionize",
        "--speakers",
        &wall,
        "session",
        "t1",
    ]));

    assert!(out.contains("Ana Pérez - GDE Android"));
    assert!(out.contains("Stage    : Auditorio"));
}

#[test]
fn test_sessionize_general_track_in_timeline() {
    let input = write_fixture("sessionize_timeline", GRID);

    let out = stdout_of(ds_with("sessionize_timeline", &input).args(["--input-format", "sessionize", "timeline"]));

    assert!(out.contains("Range   : 09:00 - 11:00"));
    assert!(out.contains("General   09:00 09:15 0    52.5   Bienvenida"));
}
