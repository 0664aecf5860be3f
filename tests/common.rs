#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Two days, two stages and one general session. Timestamps carry no
/// offset, so they read as wall-clock time in any layout zone.
pub const PROGRAM: &str = r#"{
  "stages": [
    {
      "name": "Main",
      "schedule": [
        {
          "title": "Keynote",
          "description": "Apertura del DevFest con las novedades del año.",
          "start": "2025-10-10T09:15:00",
          "end": "2025-10-10T10:00:00",
          "slug": "k1",
          "speaker": [{"name": "Ana Pérez", "title": "GDE"}]
        },
        {
          "title": "Rust en producción",
          "start": "2025-10-10T10:00:00",
          "end": "2025-10-10T10:45:00",
          "slug": "r1",
          "speaker": [{"name": "Zoe Ruiz"}]
        },
        {
          "title": "Closing",
          "start": "2025-10-11T17:00:00",
          "end": "2025-10-11T17:30:00",
          "slug": "c1"
        }
      ]
    },
    {
      "name": "Lab",
      "schedule": [
        {
          "title": "Codelab Flutter",
          "start": "2025-10-10T10:00:00",
          "end": "2025-10-10T12:00:00",
          "slug": "f1"
        }
      ]
    }
  ],
  "serviceSessions": [
    {"title": "Registro", "start": "2025-10-10T08:50:00", "end": "2025-10-10T09:00:00", "slug": null}
  ]
}"#;

pub const GRID: &str = r#"[
  {
    "date": "2024-10-09T00:00:00",
    "rooms": [
      {
        "id": 1, "name": "Auditorio",
        "sessions": [
          {"id": "s1", "title": "Bienvenida", "startsAt": "2024-10-09T09:00:00", "endsAt": "2024-10-09T09:15:00",
           "speakers": [], "isServiceSession": true, "isPlenumSession": false},
          {"id": "t1", "title": "Keynote", "startsAt": "2024-10-09T09:15:00", "endsAt": "2024-10-09T10:00:00",
           "speakers": [{"id": "sp1", "name": "Ana"}], "isServiceSession": false, "isPlenumSession": false}
        ]
      },
      {
        "id": 2, "name": "Aula 1",
        "sessions": [
          {"id": "t2", "title": "Kotlin", "startsAt": "2024-10-09T10:00:00", "endsAt": "2024-10-09T10:45:00",
           "speakers": [], "isServiceSession": false, "isPlenumSession": false}
        ]
      }
    ]
  }
]"#;

pub const WALL: &str = r#"[
  {"id": "sp1", "fullName": "Ana Pérez", "tagLine": "GDE Android", "profilePicture": null, "isTopSpeaker": true}
]"#;

pub fn ds() -> Command {
    cargo_bin_cmd!("devfest-schedule")
}

/// Path inside the temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_devfest.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, content).expect("write fixture");
    path
}

/// Command reading `input` in UTC with a config file that does not exist,
/// so the user's own configuration never leaks into a test.
pub fn ds_with(name: &str, input: &str) -> Command {
    let mut cmd = ds();
    cmd.args([
        "--config",
        &temp_path(&format!("{name}_noconf"), "conf"),
        "--offset",
        "+00:00",
        "--input",
        input,
    ]);
    cmd
}

/// Stdout of a successful run
pub fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf-8 stdout")
}
