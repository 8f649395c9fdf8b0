///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        account -> Text,
        nickname -> Text,
        password -> Text,
        avatar -> Nullable<Text>,
        bio -> Nullable<Text>,
        gender -> SmallInt,
        region -> Nullable<Text>,
        // ISO 8601 calendar date (YYYY-MM-DD)
        birthday -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    admins (id) {
        id -> BigInt,
        username -> Text,
        password -> Text,
        role -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Travelogues
///////////////////////////////////////////////////////////////////////

table! {
    travelogues (id) {
        id -> BigInt,
        author_id -> BigInt,
        title -> Text,
        content -> Text,
        location -> Text,
        // ISO 8601 calendar dates (YYYY-MM-DD) that sort lexicographically
        start_date -> Text,
        end_date -> Text,
        participants -> BigInt,
        expenditure -> BigInt,
        video_url -> Nullable<Text>,
        likes -> BigInt,
        status -> SmallInt,
        rejection_reason -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(travelogues -> users (author_id));

table! {
    travelogue_images (id) {
        id -> BigInt,
        travelogue_id -> BigInt,
        url -> Text,
        position -> BigInt,
    }
}

joinable!(travelogue_images -> travelogues (travelogue_id));

table! {
    reviews (id) {
        id -> BigInt,
        travelogue_id -> BigInt,
        action -> Text,
        rejection_reason -> Nullable<Text>,
        reviewer_id -> Nullable<BigInt>,
        review_time -> BigInt,
    }
}

joinable!(reviews -> travelogues (travelogue_id));

table! {
    likes (user_id, travelogue_id) {
        user_id -> BigInt,
        travelogue_id -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(likes -> users (user_id));
joinable!(likes -> travelogues (travelogue_id));

///////////////////////////////////////////////////////////////////////
// Messages
///////////////////////////////////////////////////////////////////////

table! {
    messages (id) {
        id -> BigInt,
        recipient_id -> BigInt,
        kind -> Text,
        title -> Text,
        content -> Text,
        outcome -> Nullable<Text>,
        travelogue_id -> Nullable<BigInt>,
        from_user -> Nullable<Text>,
        created_at -> BigInt,
        is_read -> Bool,
    }
}

joinable!(messages -> users (recipient_id));

allow_tables_to_appear_in_same_query!(
    users,
    admins,
    travelogues,
    travelogue_images,
    reviews,
    likes,
    messages,
);
