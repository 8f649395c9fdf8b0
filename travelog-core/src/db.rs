use crate::repositories::*;

pub trait Db: TravelogueRepo + ReviewRepo + LikeRepo + UserRepo + AdminRepo + MessageRepo {}

impl<T> Db for T where T: TravelogueRepo + ReviewRepo + LikeRepo + UserRepo + AdminRepo + MessageRepo
{}
