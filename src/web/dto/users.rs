use crate::{
    model::entity::UserRole,
    validation::{DefaultValue, FieldRule, Schema},
};

pub static USER_CREATE_SCHEMA: Schema = Schema::new(
    "user",
    &[
        FieldRule::string("email"),
        FieldRule::string("password"),
        FieldRule::string("firstName"),
        FieldRule::string("lastName"),
        FieldRule::one_of("role", UserRole::VALUES).with_default(DefaultValue::String("student")),
    ],
);
