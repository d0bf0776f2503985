use cb_core::RecipeCategory;
use clap::{ArgGroup, Subcommand};

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in to it
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },

    /// Forget the saved session
    Logout,

    /// Show the signed-in account and this month's usage
    Whoami,

    /// Generate a recipe from what is in the fridge
    Generate {
        /// Repeat for each ingredient
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// salato, dolce or veloce
        #[arg(long, default_value = "salato")]
        category: RecipeCategory,

        #[arg(long, default_value_t = 4)]
        servings: u32,
    },

    /// Start an upgrade to the unlimited plan
    Checkout {
        /// Where the payment provider sends the browser back to
        #[arg(long)]
        origin_url: String,
    },

    /// Wait for a checkout to be paid
    #[command(group(
        ArgGroup::new("source")
            .required(true)
            .args(["session_id", "return_url"])
    ))]
    Confirm {
        #[arg(long)]
        session_id: Option<String>,

        /// Success redirect URL carrying `session_id` in its query
        #[arg(long)]
        return_url: Option<String>,
    },
}
