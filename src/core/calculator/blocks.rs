use crate::models::session::Session;

/// Sessions of one track sharing the same start.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBlock<'a> {
    pub start: &'a str,
    pub sessions: Vec<&'a Session>,
}

/// Group a track's sessions by their raw start, blocks in first-seen order.
pub fn group_by_start(sessions: &[Session]) -> Vec<TimeBlock<'_>> {
    sessions.iter().fold(Vec::new(), |mut blocks: Vec<TimeBlock<'_>>, session| {
        match blocks.iter_mut().find(|b| b.start == session.start) {
            Some(block) => block.sessions.push(session),
            None => blocks.push(TimeBlock {
                start: &session.start,
                sessions: vec![session],
            }),
        }
        blocks
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_talks_share_a_block() {
        let sessions = vec![
            Session::new("A", "2025-10-10T10:00:00", "2025-10-10T10:30:00"),
            Session::new("B", "2025-10-10T09:00:00", "2025-10-10T09:30:00"),
            Session::new("C", "2025-10-10T10:00:00", "2025-10-10T10:45:00"),
        ];

        let blocks = group_by_start(&sessions);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start, "2025-10-10T10:00:00");
        assert_eq!(
            blocks[0].sessions.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            ["A", "C"]
        );
        assert_eq!(blocks[1].sessions.len(), 1);
    }

    #[test]
    fn empty_track_has_no_blocks() {
        assert!(group_by_start(&[]).is_empty());
    }
}
