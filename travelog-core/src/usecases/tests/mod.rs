use super::prelude::*;
use std::{cell::RefCell, cmp::Ordering};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub travelogues: RefCell<Vec<Travelogue>>,
    pub reviews: RefCell<Vec<ReviewRecord>>,
    pub likes: RefCell<Vec<(UserId, TravelId)>>,
    pub users: RefCell<Vec<User>>,
    pub admins: RefCell<Vec<Admin>>,
    pub messages: RefCell<Vec<Message>>,
}

fn next_id<T>(items: &[T], id: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id).max().unwrap_or_default() + 1
}

impl MockDb {
    fn author_info(&self, id: UserId) -> AuthorInfo {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .map(|u| AuthorInfo {
                id,
                nickname: u.nickname.clone(),
                avatar: u.avatar.clone(),
            })
            .unwrap_or_else(|| AuthorInfo {
                id,
                nickname: String::new(),
                avatar: None,
            })
    }

    fn matches(&self, query: &TravelogueQuery, t: &Travelogue, author: &AuthorInfo) -> bool {
        if !t.status.exists() {
            return false;
        }
        if query.status.is_some_and(|s| s != t.status) {
            return false;
        }
        match &query.author {
            Some(AuthorFilter::Id(id)) if *id != t.author => return false,
            Some(AuthorFilter::Nickname(n)) if *n != author.nickname => return false,
            _ => {}
        }
        if let Some(keyword) = &query.keyword {
            let keyword = keyword.to_lowercase();
            if !t.title.to_lowercase().contains(&keyword)
                && !author.nickname.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        if let Some(user) = query.liked_by {
            if !self.likes.borrow().contains(&(user, t.id)) {
                return false;
            }
        }
        true
    }
}

fn compare(sort_by: SortField, a: &Travelogue, b: &Travelogue) -> Ordering {
    match sort_by {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::Likes => a.likes.cmp(&b.likes),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
        SortField::Expenditure => a.expenditure.cmp(&b.expenditure),
    }
    .then(a.id.value().cmp(&b.id.value()))
}

impl TravelogueRepo for MockDb {
    fn create_travelogue(&self, t: &Travelogue) -> RepoResult<TravelId> {
        let mut travelogues = self.travelogues.borrow_mut();
        let id = TravelId::new(next_id(&travelogues, |t| t.id.value()));
        let mut t = t.clone();
        t.id = id;
        travelogues.push(t);
        Ok(id)
    }

    fn update_travelogue(&self, t: &Travelogue) -> RepoResult<()> {
        let mut travelogues = self.travelogues.borrow_mut();
        let existing = travelogues
            .iter_mut()
            .find(|x| x.id == t.id)
            .ok_or(RepoError::NotFound)?;
        let likes = existing.likes;
        *existing = t.clone();
        existing.likes = likes;
        Ok(())
    }

    fn get_travelogue(&self, id: TravelId) -> RepoResult<Travelogue> {
        self.travelogues
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_travelogue_with_author(&self, id: TravelId) -> RepoResult<(Travelogue, AuthorInfo)> {
        let t = self.get_travelogue(id)?;
        let author = self.author_info(t.author);
        Ok((t, author))
    }

    fn query_travelogues(
        &self,
        query: &TravelogueQuery,
        pagination: &Pagination,
    ) -> RepoResult<(Vec<(Travelogue, AuthorInfo)>, u64)> {
        let mut matches: Vec<_> = self
            .travelogues
            .borrow()
            .iter()
            .map(|t| (t.clone(), self.author_info(t.author)))
            .filter(|(t, a)| self.matches(query, t, a))
            .collect();
        matches.sort_by(|(a, _), (b, _)| match query.order {
            SortOrder::Asc => compare(query.sort_by, a, b),
            SortOrder::Desc => compare(query.sort_by, b, a),
        });
        let total = matches.len() as u64;
        let offset = pagination.offset.unwrap_or_default() as usize;
        let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        let page = matches.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }

    fn count_travelogues_by_status(&self) -> RepoResult<Vec<(TravelogueStatus, u64)>> {
        let mut counts: Vec<(TravelogueStatus, u64)> = vec![];
        for t in self.travelogues.borrow().iter() {
            match counts.iter_mut().find(|(s, _)| *s == t.status) {
                Some((_, n)) => *n += 1,
                None => counts.push((t.status, 1)),
            }
        }
        Ok(counts)
    }
}

impl ReviewRepo for MockDb {
    fn add_review_record(&self, r: &NewReviewRecord) -> RepoResult<ReviewId> {
        let mut reviews = self.reviews.borrow_mut();
        let id = ReviewId::new(next_id(&reviews, |r| r.id.value()));
        reviews.push(ReviewRecord {
            id,
            travelogue: r.travelogue,
            action: r.action,
            rejection_reason: r.rejection_reason.clone(),
            reviewer: r.reviewer,
            review_time: r.review_time,
        });
        Ok(id)
    }

    fn load_review_records(&self, travelogue: TravelId) -> RepoResult<Vec<ReviewRecord>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.travelogue == travelogue)
            .cloned()
            .collect())
    }
}

impl LikeRepo for MockDb {
    fn toggle_like(&self, user: UserId, travelogue: TravelId) -> RepoResult<LikeToggled> {
        let mut travelogues = self.travelogues.borrow_mut();
        let t = travelogues
            .iter_mut()
            .find(|t| t.id == travelogue)
            .ok_or(RepoError::NotFound)?;
        let mut likes = self.likes.borrow_mut();
        let liked = match likes.iter().position(|l| *l == (user, travelogue)) {
            Some(pos) => {
                likes.remove(pos);
                t.likes = t.likes.saturating_sub(1);
                false
            }
            None => {
                likes.push((user, travelogue));
                t.likes += 1;
                true
            }
        };
        Ok(LikeToggled {
            travelogue,
            user,
            liked,
            likes: t.likes,
        })
    }

    fn is_liked_by(&self, user: UserId, travelogue: TravelId) -> RepoResult<bool> {
        Ok(self.likes.borrow().contains(&(user, travelogue)))
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, u: &User) -> RepoResult<UserId> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|x| x.account == u.account) {
            return Err(RepoError::AlreadyExists);
        }
        let id = UserId::new(next_id(&users, |u| u.id.value()));
        let mut u = u.clone();
        u.id = id;
        users.push(u);
        Ok(id)
    }

    fn update_user(&self, u: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|x| x.id == u.id)
            .ok_or(RepoError::NotFound)?;
        *existing = u.clone();
        Ok(())
    }

    fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_account(&self, account: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.account == account)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl AdminRepo for MockDb {
    fn create_admin(&self, a: &Admin) -> RepoResult<AdminId> {
        let mut admins = self.admins.borrow_mut();
        if admins.iter().any(|x| x.username == a.username) {
            return Err(RepoError::AlreadyExists);
        }
        let id = AdminId::new(next_id(&admins, |a| a.id.value()));
        let mut a = a.clone();
        a.id = id;
        admins.push(a);
        Ok(id)
    }

    fn get_admin(&self, id: AdminId) -> RepoResult<Admin> {
        self.admins
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_admin_by_username(&self, username: &str) -> RepoResult<Option<Admin>> {
        Ok(self
            .admins
            .borrow()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
}

impl MessageRepo for MockDb {
    fn create_message(&self, m: &NewMessage) -> RepoResult<MessageId> {
        let mut messages = self.messages.borrow_mut();
        let id = MessageId::new(next_id(&messages, |m| m.id.value()));
        messages.push(Message {
            id,
            recipient: m.recipient,
            kind: m.kind,
            title: m.title.clone(),
            content: m.content.clone(),
            outcome: m.outcome,
            travelogue: m.travelogue,
            from_user: m.from_user.clone(),
            created_at: m.created_at,
            is_read: false,
        });
        Ok(id)
    }

    fn messages_of_user(&self, user: UserId, kind: Option<MessageKind>) -> RepoResult<Vec<Message>> {
        let mut messages: Vec<_> = self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.recipient == user)
            .filter(|m| kind.map_or(true, |k| k == m.kind))
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.value().cmp(&a.id.value())));
        Ok(messages)
    }

    fn mark_message_read(&self, user: UserId, id: MessageId) -> RepoResult<()> {
        let mut messages = self.messages.borrow_mut();
        let msg = messages
            .iter_mut()
            .find(|m| m.id == id && m.recipient == user)
            .ok_or(RepoError::NotFound)?;
        msg.is_read = true;
        Ok(())
    }

    fn mark_all_messages_read(&self, user: UserId) -> RepoResult<u64> {
        let mut count = 0;
        for msg in self.messages.borrow_mut().iter_mut() {
            if msg.recipient == user && !msg.is_read {
                msg.is_read = true;
                count += 1;
            }
        }
        Ok(count)
    }
}
