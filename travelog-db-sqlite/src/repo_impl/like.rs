use super::*;

impl LikeRepo for DbReadOnly<'_> {
    fn toggle_like(&self, _user: UserId, _travelogue: TravelId) -> Result<LikeToggled> {
        unreachable!();
    }
    fn is_liked_by(&self, user: UserId, travelogue: TravelId) -> Result<bool> {
        is_liked_by(&mut self.conn.borrow_mut(), user, travelogue)
    }
}

impl LikeRepo for DbReadWrite<'_> {
    fn toggle_like(&self, user: UserId, travelogue: TravelId) -> Result<LikeToggled> {
        toggle_like(&mut self.conn.borrow_mut(), user, travelogue)
    }
    fn is_liked_by(&self, user: UserId, travelogue: TravelId) -> Result<bool> {
        is_liked_by(&mut self.conn.borrow_mut(), user, travelogue)
    }
}

impl LikeRepo for DbConnection<'_> {
    fn toggle_like(&self, user: UserId, travelogue: TravelId) -> Result<LikeToggled> {
        toggle_like(&mut self.conn.borrow_mut(), user, travelogue)
    }
    fn is_liked_by(&self, user: UserId, travelogue: TravelId) -> Result<bool> {
        is_liked_by(&mut self.conn.borrow_mut(), user, travelogue)
    }
}

fn is_liked_by(conn: &mut SqliteConnection, user: UserId, travelogue: TravelId) -> Result<bool> {
    use schema::likes::dsl;
    let count = dsl::likes
        .filter(dsl::user_id.eq(user.value()))
        .filter(dsl::travelogue_id.eq(travelogue.value()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

// Must be invoked within a transaction to keep the
// relation and the counter consistent.
fn toggle_like(conn: &mut SqliteConnection, user: UserId, travelogue: TravelId) -> Result<LikeToggled> {
    use schema::{likes::dsl as l_dsl, travelogues::dsl as t_dsl};
    let current = t_dsl::travelogues
        .select(t_dsl::likes)
        .filter(t_dsl::id.eq(travelogue.value()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    let liked = !is_liked_by(conn, user, travelogue)?;
    let likes = if liked {
        let new_like = models::NewLike {
            user_id: user.value(),
            travelogue_id: travelogue.value(),
            created_at: Timestamp::now().as_millis(),
        };
        diesel::insert_into(l_dsl::likes)
            .values(&new_like)
            .execute(conn)
            .map_err(from_diesel_err)?;
        current.saturating_add(1)
    } else {
        diesel::delete(
            l_dsl::likes
                .filter(l_dsl::user_id.eq(user.value()))
                .filter(l_dsl::travelogue_id.eq(travelogue.value())),
        )
        .execute(conn)
        .map_err(from_diesel_err)?;
        current.saturating_sub(1).max(0)
    };
    diesel::update(t_dsl::travelogues.filter(t_dsl::id.eq(travelogue.value())))
        .set(t_dsl::likes.eq(likes))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(LikeToggled {
        travelogue,
        user,
        liked,
        likes: to_u64(likes)?,
    })
}
