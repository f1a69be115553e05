use thiserror::Error;

/// Every failure the model or a command handler can report.
///
/// Variants carry the context the presentation layer needs to render a
/// specific message: the contact name, the offending value, the index.
/// The `Display` impls double as the user-facing message text.
#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Invalid command. {usage}")]
    InvalidCommand { usage: String },

    #[error("Unknown command '{command}'. Type 'help' for the list of commands.")]
    UnknownCommand { command: String },

    #[error("Invalid contact name: '{name}'. Letters, apostrophe, hyphen and space are allowed (max 50 characters).")]
    InvalidContactName { name: String },

    #[error("Invalid phone number: {phone}. A phone must be exactly 10 digits.")]
    InvalidPhone {
        phone: String,
        name: Option<String>,
    },

    #[error("Invalid email address: {email}.")]
    InvalidEmail {
        email: String,
        name: Option<String>,
    },

    #[error("Invalid date or a date in the future: {birthday}. Use DD.MM.YYYY.")]
    InvalidBirthday {
        birthday: String,
        name: Option<String>,
    },

    #[error("Contact '{name}' already exists.")]
    ContactExists { name: String },

    #[error("Contact '{name}' not found.")]
    ContactNotFound { name: String },

    #[error("Phone {phone} is already listed for contact '{name}'.")]
    DuplicatePhone { name: String, phone: String },

    #[error("Email {email} is already listed for contact '{name}'.")]
    DuplicateEmail { name: String, email: String },

    #[error("Contact '{name}' has no phone at index {index}.")]
    PhoneNotFound { name: String, index: usize },

    #[error("Contact '{name}' has no email at index {index}.")]
    EmailNotFound { name: String, index: usize },

    #[error("No birthday is set for contact '{name}'.")]
    BirthdayNotSet { name: String },

    #[error("Invalid arguments {args:?}. {message}")]
    InvalidArguments { args: Vec<String>, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RoloError {
    /// Attach the owning contact's name to a field validation error.
    ///
    /// Field values are validated without knowing which record they are
    /// headed for; the record fills the name in before propagating.
    pub fn with_contact(self, name: &str) -> Self {
        match self {
            RoloError::InvalidPhone { phone, .. } => RoloError::InvalidPhone {
                phone,
                name: Some(name.to_string()),
            },
            RoloError::InvalidEmail { email, .. } => RoloError::InvalidEmail {
                email,
                name: Some(name.to_string()),
            },
            RoloError::InvalidBirthday { birthday, .. } => RoloError::InvalidBirthday {
                birthday,
                name: Some(name.to_string()),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RoloError>;
