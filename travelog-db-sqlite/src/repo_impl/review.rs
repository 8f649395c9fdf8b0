use super::*;

impl ReviewRepo for DbReadOnly<'_> {
    fn add_review_record(&self, _record: &NewReviewRecord) -> Result<ReviewId> {
        unreachable!();
    }
    fn load_review_records(&self, travelogue: TravelId) -> Result<Vec<ReviewRecord>> {
        load_review_records(&mut self.conn.borrow_mut(), travelogue)
    }
}

impl ReviewRepo for DbReadWrite<'_> {
    fn add_review_record(&self, record: &NewReviewRecord) -> Result<ReviewId> {
        add_review_record(&mut self.conn.borrow_mut(), record)
    }
    fn load_review_records(&self, travelogue: TravelId) -> Result<Vec<ReviewRecord>> {
        load_review_records(&mut self.conn.borrow_mut(), travelogue)
    }
}

impl ReviewRepo for DbConnection<'_> {
    fn add_review_record(&self, record: &NewReviewRecord) -> Result<ReviewId> {
        add_review_record(&mut self.conn.borrow_mut(), record)
    }
    fn load_review_records(&self, travelogue: TravelId) -> Result<Vec<ReviewRecord>> {
        load_review_records(&mut self.conn.borrow_mut(), travelogue)
    }
}

fn add_review_record(conn: &mut SqliteConnection, record: &NewReviewRecord) -> Result<ReviewId> {
    let NewReviewRecord {
        travelogue,
        action,
        rejection_reason,
        reviewer,
        review_time,
    } = record;
    let new_review = models::NewReview {
        travelogue_id: travelogue.value(),
        action: action.as_ref(),
        rejection_reason: rejection_reason.as_deref(),
        reviewer_id: reviewer.map(AdminId::value),
        review_time: review_time.as_millis(),
    };
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn load_review_records(conn: &mut SqliteConnection, travelogue: TravelId) -> Result<Vec<ReviewRecord>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::travelogue_id.eq(travelogue.value()))
        .order_by((dsl::review_time.asc(), dsl::id.asc()))
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| {
            let models::ReviewEntity {
                id,
                travelogue_id,
                action,
                rejection_reason,
                reviewer_id,
                review_time,
            } = entity;
            let action = action
                .parse::<ReviewAction>()
                .map_err(|err| anyhow!("Invalid review action '{action}': {err}"))?;
            Ok(ReviewRecord {
                id: id.into(),
                travelogue: travelogue_id.into(),
                action,
                rejection_reason,
                reviewer: reviewer_id.map(Into::into),
                review_time: Timestamp::from_millis(review_time),
            })
        })
        .collect()
}
