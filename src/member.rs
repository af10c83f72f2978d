pub type MemberId = String;

/// Percentage off the regular membership price. Not range checked.
pub type Discount = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    id: MemberId,
}

impl Member {
    pub fn new<S, I>(name: S, id: I) -> Self
    where
        S: Into<String>,
        I: Into<MemberId>,
    {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A [`Member`] with optional premium attributes, set through chained calls:
///
/// ```
/// use libmembers::member::PremiumMember;
///
/// let mut member = PremiumMember::new("Alice Smith", "PM001");
/// member.set_membership_period("12 months").set_discount(15);
///
/// assert_eq!(member.discount(), Some(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumMember {
    member: Member,
    membership_period: Option<String>,
    discount: Option<Discount>,
}

impl PremiumMember {
    pub fn new<S, I>(name: S, id: I) -> Self
    where
        S: Into<String>,
        I: Into<MemberId>,
    {
        Self {
            member: Member::new(name, id),
            membership_period: None,
            discount: None,
        }
    }

    pub fn set_membership_period<S>(&mut self, period: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.membership_period = Some(period.into());
        self
    }

    pub fn set_discount(&mut self, discount: Discount) -> &mut Self {
        self.discount = Some(discount);
        self
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    pub fn name(&self) -> &str {
        self.member.name()
    }

    pub fn id(&self) -> &str {
        self.member.id()
    }

    pub fn membership_period(&self) -> Option<&str> {
        self.membership_period.as_deref()
    }

    pub fn discount(&self) -> Option<Discount> {
        self.discount
    }
}

impl From<PremiumMember> for Member {
    fn from(premium: PremiumMember) -> Self {
        premium.member
    }
}
