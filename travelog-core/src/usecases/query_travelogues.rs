use super::prelude::*;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLimits {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for FeedLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedRequest {
    pub query: TravelogueQuery,
    /// 1-based, defaults to the first page
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// A single page of a paginated result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, page: u64, limit: u64, total: u64) -> Self {
        debug_assert!(limit > 0);
        Self {
            data,
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        let Self {
            data,
            page,
            limit,
            total,
            pages,
        } = self;
        Page {
            data: data.into_iter().map(f).collect(),
            page,
            limit,
            total,
            pages,
        }
    }
}

pub fn parse_sort_field(s: &str) -> Result<SortField> {
    let field = match s.trim() {
        "created_at" | "createdAt" => SortField::CreatedAt,
        "updated_at" | "updatedAt" => SortField::UpdatedAt,
        "likes" => SortField::Likes,
        "start_date" | "startDate" => SortField::StartDate,
        "expenditure" => SortField::Expenditure,
        _ => return Err(Error::InvalidSortField),
    };
    Ok(field)
}

pub fn parse_sort_order(s: &str) -> Result<SortOrder> {
    match s.trim().to_ascii_lowercase().as_str() {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        _ => Err(Error::InvalidSortField),
    }
}

/// Numeric values address a user id, everything else a nickname.
pub fn parse_author_filter(s: &str) -> Option<AuthorFilter> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(id) = s.parse::<UserId>() {
            return Some(AuthorFilter::Id(id));
        }
    }
    Some(AuthorFilter::Nickname(s.to_owned()))
}

pub fn query_travelogues<R>(
    repo: &R,
    limits: &FeedLimits,
    req: FeedRequest,
) -> Result<Page<(Travelogue, AuthorInfo)>>
where
    R: TravelogueRepo,
{
    let FeedRequest {
        mut query,
        page,
        limit,
    } = req;
    let page = page.unwrap_or(1);
    if page == 0 {
        return Err(Error::InvalidPage);
    }
    let limit = limit.unwrap_or(limits.default_limit);
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    let limit = limit.min(limits.max_limit);
    if query.status == Some(TravelogueStatus::Deleted) {
        return Err(Error::InvalidStatus);
    }
    query.keyword = query
        .keyword
        .map(|k| k.trim().to_owned())
        .filter(|k| !k.is_empty());
    let pagination = Pagination {
        offset: Some((page - 1).saturating_mul(limit)),
        limit: Some(limit),
    };
    let (data, total) = repo.query_travelogues(&query, &pagination)?;
    Ok(Page::new(data, page, limit, total))
}

/// Only published travelogues are visible in the public feed.
pub fn query_public_feed<R>(
    repo: &R,
    limits: &FeedLimits,
    mut req: FeedRequest,
) -> Result<Page<(Travelogue, AuthorInfo)>>
where
    R: TravelogueRepo,
{
    req.query.status = Some(TravelogueStatus::Published);
    query_travelogues(repo, limits, req)
}

pub fn query_own_travelogues<R>(
    repo: &R,
    limits: &FeedLimits,
    author: UserId,
    mut req: FeedRequest,
) -> Result<Page<(Travelogue, AuthorInfo)>>
where
    R: TravelogueRepo,
{
    req.query.author = Some(AuthorFilter::Id(author));
    query_travelogues(repo, limits, req)
}

pub fn query_liked_travelogues<R>(
    repo: &R,
    limits: &FeedLimits,
    user: UserId,
    mut req: FeedRequest,
) -> Result<Page<(Travelogue, AuthorInfo)>>
where
    R: TravelogueRepo,
{
    req.query.liked_by = Some(user);
    req.query.status = Some(TravelogueStatus::Published);
    query_travelogues(repo, limits, req)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use travelog_entities::builders::*;

    fn db_with_published(n: i64) -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).nickname("Mia").finish());
        for i in 1..=n {
            db.travelogues.borrow_mut().push(
                Travelogue::build()
                    .id(i)
                    .author(1)
                    .title(&format!("Trip #{i}"))
                    .status(TravelogueStatus::Published)
                    .created_at(Timestamp::from_secs(i))
                    .finish(),
            );
        }
        db
    }

    fn page_request(page: u64, limit: u64) -> FeedRequest {
        FeedRequest {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        }
    }

    #[test]
    fn page_count() {
        assert_eq!(Page::<()>::new(vec![], 1, 10, 0).pages, 0);
        assert_eq!(Page::<()>::new(vec![], 1, 10, 10).pages, 1);
        assert_eq!(Page::<()>::new(vec![], 1, 10, 23).pages, 3);
    }

    #[test]
    fn paginate_the_public_feed() {
        let db = db_with_published(23);
        let limits = FeedLimits::default();
        let first = query_public_feed(&db, &limits, page_request(1, 10)).unwrap();
        assert_eq!(first.total, 23);
        assert_eq!(first.pages, 3);
        assert_eq!(first.data.len(), 10);
        // newest first
        assert_eq!(first.data[0].0.id, TravelId::new(23));
        assert_eq!(first.data[0].1.nickname, "Mia");

        let last = query_public_feed(&db, &limits, page_request(3, 10)).unwrap();
        assert_eq!(last.data.len(), 3);

        let beyond = query_public_feed(&db, &limits, page_request(4, 10)).unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.total, 23);
        assert_eq!(beyond.pages, 3);
    }

    #[test]
    fn huge_page_numbers_are_empty_pages() {
        let db = db_with_published(23);
        let limits = FeedLimits::default();
        for page in [1_000_000_000_000_000_000, u64::MAX] {
            let beyond = query_public_feed(&db, &limits, page_request(page, 10)).unwrap();
            assert!(beyond.data.is_empty());
            assert_eq!(beyond.page, page);
            assert_eq!(beyond.total, 23);
            assert_eq!(beyond.pages, 3);
        }
    }

    #[test]
    fn invalid_pagination() {
        let db = db_with_published(1);
        let limits = FeedLimits::default();
        assert!(matches!(
            query_public_feed(&db, &limits, page_request(0, 10)),
            Err(Error::InvalidPage)
        ));
        assert!(matches!(
            query_public_feed(&db, &limits, page_request(1, 0)),
            Err(Error::InvalidLimit)
        ));
        let capped = query_public_feed(&db, &limits, page_request(1, 1000)).unwrap();
        assert_eq!(capped.limit, MAX_LIMIT);
    }

    #[test]
    fn public_feed_only_lists_published() {
        let db = db_with_published(2);
        for (id, status) in [
            (3, TravelogueStatus::Draft),
            (4, TravelogueStatus::Pending),
            (5, TravelogueStatus::Rejected),
            (6, TravelogueStatus::Deleted),
        ] {
            db.travelogues
                .borrow_mut()
                .push(Travelogue::build().id(id).author(1).status(status).finish());
        }
        let limits = FeedLimits::default();
        let mut req = page_request(1, 10);
        req.query.status = Some(TravelogueStatus::Pending);
        let feed = query_public_feed(&db, &limits, req).unwrap();
        assert_eq!(feed.total, 2);
        assert!(feed
            .data
            .iter()
            .all(|(t, _)| t.status == TravelogueStatus::Published));

        let all = query_travelogues(&db, &limits, page_request(1, 10)).unwrap();
        assert_eq!(all.total, 5);

        let mut req = page_request(1, 10);
        req.query.status = Some(TravelogueStatus::Deleted);
        assert!(matches!(
            query_travelogues(&db, &limits, req),
            Err(Error::InvalidStatus)
        ));
    }

    #[test]
    fn search_by_keyword() {
        let db = db_with_published(12);
        let limits = FeedLimits::default();
        let mut req = page_request(1, 10);
        req.query.keyword = Some(" trip #1".into());
        // #1, #10, #11, #12
        assert_eq!(query_public_feed(&db, &limits, req).unwrap().total, 4);

        let mut req = page_request(1, 10);
        req.query.keyword = Some("mia".into());
        assert_eq!(query_public_feed(&db, &limits, req).unwrap().total, 12);

        let mut req = page_request(1, 10);
        req.query.keyword = Some("nothing like this".into());
        let empty = query_public_feed(&db, &limits, req).unwrap();
        assert!(empty.data.is_empty());
        assert_eq!(empty.total, 0);
        assert_eq!(empty.pages, 0);
    }

    #[test]
    fn sort_by_likes() {
        let db = db_with_published(3);
        db.travelogues.borrow_mut()[1].likes = 5;
        let limits = FeedLimits::default();
        let mut req = page_request(1, 10);
        req.query.sort_by = SortField::Likes;
        let feed = query_public_feed(&db, &limits, req).unwrap();
        assert_eq!(feed.data[0].0.id, TravelId::new(2));
        let mut req = page_request(1, 10);
        req.query.order = SortOrder::Asc;
        let feed = query_public_feed(&db, &limits, req).unwrap();
        assert_eq!(feed.data[0].0.id, TravelId::new(1));
    }

    #[test]
    fn parse_query_parameters() {
        assert_eq!(parse_sort_field("likes").unwrap(), SortField::Likes);
        assert_eq!(parse_sort_field("startDate").unwrap(), SortField::StartDate);
        assert!(parse_sort_field("title").is_err());
        assert_eq!(parse_sort_order("ASC").unwrap(), SortOrder::Asc);
        assert_eq!(
            parse_author_filter("42"),
            Some(AuthorFilter::Id(UserId::new(42)))
        );
        assert_eq!(
            parse_author_filter(" Mia "),
            Some(AuthorFilter::Nickname("Mia".into()))
        );
        assert_eq!(parse_author_filter("  "), None);
    }
}
