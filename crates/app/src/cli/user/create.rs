use clap::{Args, ValueEnum};
use eshop_app::{
    auth::hash_password,
    database::{self, Db},
    domain::{
        baskets::records::BasketUuid,
        users::{
            PgUsersService, UsersService,
            data::NewUser,
            records::{Role, UserUuid},
        },
    },
};
use smallvec::SmallVec;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Employee,
    User,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Employee => Self::Employee,
            RoleArg::User => Self::User,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Login name; must be unique
    #[arg(long)]
    username: String,

    /// Plaintext password, hashed before storage
    #[arg(long, env = "ESHOP_USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Role to grant; repeat for several
    #[arg(long = "role", value_enum, default_value = "user")]
    roles: Vec<RoleArg>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

/// Validate the arguments and build the account to insert.
fn new_user(username: &str, password: &str, roles: &[RoleArg]) -> Result<NewUser, String> {
    let username = username.trim();

    if username.is_empty() {
        return Err("username cannot be empty".to_string());
    }

    if password.is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let password_hash =
        hash_password(password).map_err(|error| format!("failed to hash password: {error}"))?;

    let mut roles: SmallVec<[Role; 2]> = roles.iter().copied().map(Role::from).collect();
    roles.sort_unstable();
    roles.dedup();

    Ok(NewUser {
        uuid: UserUuid::new(),
        username: username.to_string(),
        password_hash,
        basket_uuid: BasketUuid::new(),
        roles,
    })
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let password = Zeroizing::new(args.password);

    let new_user = new_user(&args.username, &password, &args.roles)?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgUsersService::new(Db::new(pool));

    let user = service
        .create_user(new_user)
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("username: {}", user.username);
    println!("basket_uuid: {}", user.basket_uuid);
    for role in user.roles() {
        println!("role: {role}");
    }

    Ok(())
}
