use super::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub draft: u64,
    pub pending: u64,
    pub published: u64,
    pub rejected: u64,
    pub deleted: u64,
}

impl Statistics {
    /// Number of travelogues that have not been deleted.
    pub const fn total(&self) -> u64 {
        self.draft + self.pending + self.published + self.rejected
    }
}

pub fn statistics<R: TravelogueRepo>(repo: &R) -> Result<Statistics> {
    let mut stats = Statistics::default();
    for (status, count) in repo.count_travelogues_by_status()? {
        let field = match status {
            TravelogueStatus::Draft => &mut stats.draft,
            TravelogueStatus::Pending => &mut stats.pending,
            TravelogueStatus::Published => &mut stats.published,
            TravelogueStatus::Rejected => &mut stats.rejected,
            TravelogueStatus::Deleted => &mut stats.deleted,
        };
        *field += count;
    }
    Ok(stats)
}
