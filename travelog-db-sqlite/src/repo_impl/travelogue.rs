use std::collections::HashMap;

use diesel::helper_types::{InnerJoin, IntoBoxed};
use diesel::sqlite::Sqlite;

use super::*;

impl TravelogueRepo for DbReadOnly<'_> {
    fn create_travelogue(&self, _travelogue: &Travelogue) -> Result<TravelId> {
        unreachable!();
    }
    fn update_travelogue(&self, _travelogue: &Travelogue) -> Result<()> {
        unreachable!();
    }

    fn get_travelogue(&self, id: TravelId) -> Result<Travelogue> {
        get_travelogue(&mut self.conn.borrow_mut(), id)
    }
    fn get_travelogue_with_author(&self, id: TravelId) -> Result<(Travelogue, AuthorInfo)> {
        get_travelogue_with_author(&mut self.conn.borrow_mut(), id)
    }
    fn query_travelogues(
        &self,
        query: &TravelogueQuery,
        pagination: &Pagination,
    ) -> Result<(Vec<(Travelogue, AuthorInfo)>, u64)> {
        query_travelogues(&mut self.conn.borrow_mut(), query, pagination)
    }
    fn count_travelogues_by_status(&self) -> Result<Vec<(TravelogueStatus, u64)>> {
        count_travelogues_by_status(&mut self.conn.borrow_mut())
    }
}

impl TravelogueRepo for DbReadWrite<'_> {
    fn create_travelogue(&self, travelogue: &Travelogue) -> Result<TravelId> {
        create_travelogue(&mut self.conn.borrow_mut(), travelogue)
    }
    fn update_travelogue(&self, travelogue: &Travelogue) -> Result<()> {
        update_travelogue(&mut self.conn.borrow_mut(), travelogue)
    }

    fn get_travelogue(&self, id: TravelId) -> Result<Travelogue> {
        get_travelogue(&mut self.conn.borrow_mut(), id)
    }
    fn get_travelogue_with_author(&self, id: TravelId) -> Result<(Travelogue, AuthorInfo)> {
        get_travelogue_with_author(&mut self.conn.borrow_mut(), id)
    }
    fn query_travelogues(
        &self,
        query: &TravelogueQuery,
        pagination: &Pagination,
    ) -> Result<(Vec<(Travelogue, AuthorInfo)>, u64)> {
        query_travelogues(&mut self.conn.borrow_mut(), query, pagination)
    }
    fn count_travelogues_by_status(&self) -> Result<Vec<(TravelogueStatus, u64)>> {
        count_travelogues_by_status(&mut self.conn.borrow_mut())
    }
}

impl TravelogueRepo for DbConnection<'_> {
    fn create_travelogue(&self, travelogue: &Travelogue) -> Result<TravelId> {
        create_travelogue(&mut self.conn.borrow_mut(), travelogue)
    }
    fn update_travelogue(&self, travelogue: &Travelogue) -> Result<()> {
        update_travelogue(&mut self.conn.borrow_mut(), travelogue)
    }

    fn get_travelogue(&self, id: TravelId) -> Result<Travelogue> {
        get_travelogue(&mut self.conn.borrow_mut(), id)
    }
    fn get_travelogue_with_author(&self, id: TravelId) -> Result<(Travelogue, AuthorInfo)> {
        get_travelogue_with_author(&mut self.conn.borrow_mut(), id)
    }
    fn query_travelogues(
        &self,
        query: &TravelogueQuery,
        pagination: &Pagination,
    ) -> Result<(Vec<(Travelogue, AuthorInfo)>, u64)> {
        query_travelogues(&mut self.conn.borrow_mut(), query, pagination)
    }
    fn count_travelogues_by_status(&self) -> Result<Vec<(TravelogueStatus, u64)>> {
        count_travelogues_by_status(&mut self.conn.borrow_mut())
    }
}

fn load_travelogue(entity: models::TravelogueEntity, images: Vec<Image>) -> Result<Travelogue> {
    let models::TravelogueEntity {
        id,
        author_id,
        title,
        content,
        location,
        start_date,
        end_date,
        participants,
        expenditure,
        video_url,
        likes,
        status,
        rejection_reason,
        created_at,
        updated_at,
    } = entity;
    let participants = u32::try_from(participants)
        .map_err(|err| anyhow!("Invalid number of participants: {err}"))?;
    Ok(Travelogue {
        id: id.into(),
        author: author_id.into(),
        title,
        content,
        location,
        start_date: load_date(&start_date)?,
        end_date: load_date(&end_date)?,
        participants,
        expenditure: to_u64(expenditure)?,
        video_url,
        images,
        likes: to_u64(likes)?,
        status: load_status(status)?,
        rejection_reason,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_images(conn: &mut SqliteConnection, ids: &[i64]) -> Result<HashMap<i64, Vec<Image>>> {
    use schema::travelogue_images::dsl;
    let mut images: HashMap<i64, Vec<Image>> = HashMap::new();
    let rows = dsl::travelogue_images
        .filter(dsl::travelogue_id.eq_any(ids))
        .order_by((dsl::travelogue_id, dsl::position))
        .load::<models::TravelogueImageEntity>(conn)
        .map_err(from_diesel_err)?;
    for models::TravelogueImageEntity {
        id,
        travelogue_id,
        url,
        position,
    } in rows
    {
        let order = u32::try_from(position)
            .map_err(|err| anyhow!("Invalid image position {position}: {err}"))?;
        images.entry(travelogue_id).or_default().push(Image {
            id: Some(id.into()),
            url,
            order,
        });
    }
    Ok(images)
}

fn store_images(conn: &mut SqliteConnection, travelogue_id: i64, images: &[Image]) -> Result<()> {
    use schema::travelogue_images::dsl;
    diesel::delete(dsl::travelogue_images.filter(dsl::travelogue_id.eq(travelogue_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let new_images: Vec<_> = images
        .iter()
        .map(|img| models::NewTravelogueImage {
            travelogue_id,
            url: &img.url,
            position: i64::from(img.order),
        })
        .collect();
    diesel::insert_into(dsl::travelogue_images)
        .values(&new_images)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_travelogue(conn: &mut SqliteConnection, t: &Travelogue) -> Result<TravelId> {
    let new_travelogue = models::NewTravelogue {
        author_id: t.author.value(),
        title: &t.title,
        content: &t.content,
        location: &t.location,
        start_date: format_date(t.start_date),
        end_date: format_date(t.end_date),
        participants: i64::from(t.participants),
        expenditure: to_i64(t.expenditure)?,
        video_url: t.video_url.as_deref(),
        likes: to_i64(t.likes)?,
        status: store_status(t.status),
        rejection_reason: t.rejection_reason.as_deref(),
        created_at: t.created_at.as_millis(),
        updated_at: t.updated_at.as_millis(),
    };
    diesel::insert_into(schema::travelogues::table)
        .values(&new_travelogue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = inserted_rowid(conn)?;
    store_images(conn, id, &t.images)?;
    Ok(id.into())
}

fn update_travelogue(conn: &mut SqliteConnection, t: &Travelogue) -> Result<()> {
    use schema::travelogues::dsl;
    let changes = models::ChangedTravelogue {
        title: &t.title,
        content: &t.content,
        location: &t.location,
        start_date: format_date(t.start_date),
        end_date: format_date(t.end_date),
        participants: i64::from(t.participants),
        expenditure: to_i64(t.expenditure)?,
        video_url: t.video_url.as_deref(),
        status: store_status(t.status),
        rejection_reason: t.rejection_reason.as_deref(),
        updated_at: t.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::travelogues.filter(dsl::id.eq(t.id.value())))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    store_images(conn, t.id.value(), &t.images)
}

fn get_travelogue(conn: &mut SqliteConnection, id: TravelId) -> Result<Travelogue> {
    use schema::travelogues::dsl;
    let entity = dsl::travelogues
        .filter(dsl::id.eq(id.value()))
        .first::<models::TravelogueEntity>(conn)
        .map_err(from_diesel_err)?;
    let images = load_images(conn, &[entity.id])?
        .remove(&entity.id)
        .unwrap_or_default();
    load_travelogue(entity, images)
}

type JoinedRow = (models::TravelogueEntity, i64, String, Option<String>);

fn load_joined_rows(
    conn: &mut SqliteConnection,
    rows: Vec<JoinedRow>,
) -> Result<Vec<(Travelogue, AuthorInfo)>> {
    let ids: Vec<_> = rows.iter().map(|(t, ..)| t.id).collect();
    let mut images = load_images(conn, &ids)?;
    rows.into_iter()
        .map(|(entity, author_id, nickname, avatar)| {
            let images = images.remove(&entity.id).unwrap_or_default();
            let travelogue = load_travelogue(entity, images)?;
            let author = AuthorInfo {
                id: author_id.into(),
                nickname,
                avatar,
            };
            Ok((travelogue, author))
        })
        .collect()
}

fn get_travelogue_with_author(
    conn: &mut SqliteConnection,
    id: TravelId,
) -> Result<(Travelogue, AuthorInfo)> {
    use schema::{travelogues::dsl as t_dsl, users::dsl as u_dsl};
    let row = t_dsl::travelogues
        .inner_join(u_dsl::users)
        .filter(t_dsl::id.eq(id.value()))
        .select((
            schema::travelogues::all_columns,
            u_dsl::id,
            u_dsl::nickname,
            u_dsl::avatar,
        ))
        .first::<JoinedRow>(conn)
        .map_err(from_diesel_err)?;
    load_joined_rows(conn, vec![row])?
        .pop()
        .ok_or(repo::Error::NotFound)
}

type BoxedQuery = IntoBoxed<'static, InnerJoin<schema::travelogues::table, schema::users::table>, Sqlite>;

fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn filtered_travelogues(query: &TravelogueQuery) -> BoxedQuery {
    use schema::{likes::dsl as l_dsl, travelogues::dsl as t_dsl, users::dsl as u_dsl};

    let mut boxed = t_dsl::travelogues
        .inner_join(u_dsl::users)
        .into_boxed()
        // Deleted travelogues are never listed
        .filter(t_dsl::status.ne(store_status(TravelogueStatus::Deleted)));

    if let Some(status) = query.status {
        boxed = boxed.filter(t_dsl::status.eq(store_status(status)));
    }

    match &query.author {
        Some(AuthorFilter::Id(id)) => {
            boxed = boxed.filter(t_dsl::author_id.eq(id.value()));
        }
        Some(AuthorFilter::Nickname(nickname)) => {
            boxed = boxed.filter(u_dsl::nickname.eq(nickname.clone()));
        }
        None => {}
    }

    if let Some(keyword) = &query.keyword {
        // LIKE is case-insensitive for ASCII characters in SQLite
        let pattern = like_pattern(keyword);
        boxed = boxed.filter(
            t_dsl::title
                .like(pattern.clone())
                .escape('\\')
                .or(u_dsl::nickname.like(pattern).escape('\\')),
        );
    }

    if let Some(user) = query.liked_by {
        let liked = l_dsl::likes
            .select(l_dsl::travelogue_id)
            .filter(l_dsl::user_id.eq(user.value()));
        boxed = boxed.filter(t_dsl::id.eq_any(liked));
    }

    boxed
}

fn query_travelogues(
    conn: &mut SqliteConnection,
    query: &TravelogueQuery,
    pagination: &Pagination,
) -> Result<(Vec<(Travelogue, AuthorInfo)>, u64)> {
    use schema::{travelogues::dsl as t_dsl, users::dsl as u_dsl};

    let total = filtered_travelogues(query)
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;

    let mut boxed = filtered_travelogues(query);
    boxed = match (query.sort_by, query.order) {
        (SortField::CreatedAt, SortOrder::Asc) => boxed.order_by(t_dsl::created_at.asc()),
        (SortField::CreatedAt, SortOrder::Desc) => boxed.order_by(t_dsl::created_at.desc()),
        (SortField::UpdatedAt, SortOrder::Asc) => boxed.order_by(t_dsl::updated_at.asc()),
        (SortField::UpdatedAt, SortOrder::Desc) => boxed.order_by(t_dsl::updated_at.desc()),
        (SortField::Likes, SortOrder::Asc) => boxed.order_by(t_dsl::likes.asc()),
        (SortField::Likes, SortOrder::Desc) => boxed.order_by(t_dsl::likes.desc()),
        (SortField::StartDate, SortOrder::Asc) => boxed.order_by(t_dsl::start_date.asc()),
        (SortField::StartDate, SortOrder::Desc) => boxed.order_by(t_dsl::start_date.desc()),
        (SortField::Expenditure, SortOrder::Asc) => boxed.order_by(t_dsl::expenditure.asc()),
        (SortField::Expenditure, SortOrder::Desc) => boxed.order_by(t_dsl::expenditure.desc()),
    };
    // Stable order for equal sort keys
    boxed = match query.order {
        SortOrder::Asc => boxed.then_order_by(t_dsl::id.asc()),
        SortOrder::Desc => boxed.then_order_by(t_dsl::id.desc()),
    };

    if let Some(offset) = pagination.offset {
        // Far beyond the last row either way
        boxed = boxed.offset(i64::try_from(offset).unwrap_or(i64::MAX));
    }
    if let Some(limit) = pagination.limit {
        boxed = boxed.limit(to_i64(limit)?);
    }

    let rows = boxed
        .select((
            schema::travelogues::all_columns,
            u_dsl::id,
            u_dsl::nickname,
            u_dsl::avatar,
        ))
        .load::<JoinedRow>(conn)
        .map_err(from_diesel_err)?;

    Ok((load_joined_rows(conn, rows)?, to_u64(total)?))
}

fn count_travelogues_by_status(
    conn: &mut SqliteConnection,
) -> Result<Vec<(TravelogueStatus, u64)>> {
    use schema::travelogues::dsl;
    dsl::travelogues
        .group_by(dsl::status)
        .select((dsl::status, diesel::dsl::count_star()))
        .load::<(i16, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(status, count)| Ok((load_status(status)?, to_u64(count)?)))
        .collect()
}
