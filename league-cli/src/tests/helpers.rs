//! Test helpers for laying out match files and scratch databases.

use crate::input::InputArgs;
use crate::leaderboard::LeaderboardArgs;
use camino::{Utf8Path, Utf8PathBuf};
use league_core::{MatchStore, SqliteMatchStore};
use tempfile::TempDir;

pub(super) const REFERENCE_CSV: &str = "\
competition_id,date,team_1,team_1_score,team_2,team_2_score
C1,2023-11-11,Team A,1,Team B,0
C1,2023-11-11,Team B,1,Team C,0
C1,2023-11-11,Team A,1,Team D,0
C1,2023-11-12,Team B,2,Team A,2
C1,2023-11-12,Team C,2,Team D,1
C1,2023-11-12,Team A,2,Team B,1
";

pub(super) const REFERENCE_TABLE: &str = "\
team,play,win,draw,lose,points
Team A,4,3,1,0,10
Team B,4,1,1,2,4
Team C,2,1,0,1,3
Team D,2,0,0,2,0
";

pub(super) const MALFORMED_CSV: &str = "\
competition_id,date,team_1,team_1_score,team_2,team_2_score
C1,2023-11-11,Team A,1,Team B,0
C1,2023-13-40,A,1,B,x
";

/// Scratch directory holding match files, outputs and the database.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn db(&self) -> Utf8PathBuf {
        self.path("league.db")
    }

    pub(super) fn input_args(&self, filename: &Utf8Path) -> InputArgs {
        InputArgs {
            filename: Some(filename.to_path_buf()),
            dbname: Some(self.db()),
            ..InputArgs::default()
        }
    }

    pub(super) fn leaderboard_args(&self, competition_id: &str, output: &Utf8Path) -> LeaderboardArgs {
        LeaderboardArgs {
            competition_id: Some(competition_id.to_owned()),
            filename: Some(output.to_path_buf()),
            dbname: Some(self.db()),
            ..LeaderboardArgs::default()
        }
    }

    /// Command line for `run_from`, with the scratch database appended.
    pub(super) fn command_line(&self, args: &[&str]) -> Vec<String> {
        let mut line = vec!["league".to_owned()];
        line.extend(args.iter().map(|arg| (*arg).to_owned()));
        line.extend(["--dbname".to_owned(), self.db().into_string()]);
        line
    }

    pub(super) fn stored_count(&self, competition_id: &str) -> usize {
        SqliteMatchStore::open(&self.db())
            .expect("open store")
            .results_for_competition(competition_id)
            .expect("query store")
            .len()
    }

    pub(super) fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read output")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write file");
}
