use crate::domain::params::AuthorizeParameters;
use crate::domain::payload::{AssembledPayload, FieldGroup, FieldSet, fields};
use crate::domain::ports::{AmountFormatterBox, ClockBox, SignerBox};
use crate::error::{PaymentError, Result};
use chrono::SecondsFormat;
use rust_decimal::Decimal;
use tracing::instrument;

/// Hash algorithm label announced in `PBX_HASH`.
pub const HASH_ALGORITHM: &str = "SHA512";

const ECHO_BASE: &str = "Mt:M;Id:R;Ref:A;Erreur:E";
const ECHO_ABONNE: &str = ";Abo:U;CardType:C;CardEmpreinte:H;Card2LastNumber:J;Card6FirstNumber:N";
const ECHO_TOKEN: &str = ";AboUse:B";
const ECHO_TAIL: &str = ";3d:G;sign:K";

/// Required values, available once validation has passed.
struct Required<'a> {
    amount: Decimal,
    currency: &'a str,
    email: &'a str,
}

/// Builds the list of result attributes the gateway should echo back on callback.
///
/// Subscription-related letters are only requested when the merchant wants a subscriber
/// registered, and `AboUse` only when an existing token is being charged.
pub fn echo_fields(want_abonne: bool, has_token: bool) -> String {
    let mut spec = String::from(ECHO_BASE);
    if want_abonne {
        spec.push_str(ECHO_ABONNE);
    }
    if has_token {
        spec.push_str(ECHO_TOKEN);
    }
    spec.push_str(ECHO_TAIL);
    spec
}

/// Assembles and signs authorization requests.
///
/// The builder holds no per-request state; one instance can serve any number of requests.
pub struct RequestBuilder {
    signer: SignerBox,
    formatter: AmountFormatterBox,
    clock: ClockBox,
}

impl RequestBuilder {
    /// Creates a new `RequestBuilder`.
    ///
    /// # Arguments
    ///
    /// * `signer` - Signs the assembled fields with the merchant secret.
    /// * `formatter` - Converts amount and currency to their wire form.
    /// * `clock` - Supplies the transaction time when the parameters carry none.
    pub fn new(signer: SignerBox, formatter: AmountFormatterBox, clock: ClockBox) -> Self {
        Self {
            signer,
            formatter,
            clock,
        }
    }

    /// Validates `params` and returns the signed payload.
    ///
    /// Fails with [`PaymentError::ValidationError`] naming the first missing field; amount and
    /// currency are checked before the card holder's email.
    #[instrument(skip_all, fields(transaction_id = params.transaction_id.as_deref().unwrap_or_default()))]
    pub fn build(&self, params: &AuthorizeParameters) -> Result<AssembledPayload> {
        let required = Self::validate(params)
            .inspect_err(|e| tracing::warn!("Rejected authorization request: {e}"))?;

        let mut set = FieldSet::default();
        set.merge(Self::base_data(params));
        set.merge(self.transaction_data(params, &required)?);
        set.merge(Self::url_data(params));
        set.merge(Self::abonne_data(params));
        if params.authorize_only {
            set.insert(fields::AUTHORIZE_ONLY, "O");
        }

        let signature = self.signer.sign(set.signing_message().as_bytes())?;
        let payload = set.seal(signature);

        tracing::debug!(
            fields = payload.len(),
            test_mode = params.test_mode,
            "Assembled authorization payload"
        );
        Ok(payload)
    }

    fn validate(params: &AuthorizeParameters) -> Result<Required<'_>> {
        let missing = |field: &str| PaymentError::ValidationError(field.to_string());

        // Core fields first, then card fields.
        let amount = params.amount.ok_or_else(|| missing("amount"))?;
        let currency = params.currency().ok_or_else(|| missing("currency"))?;
        let email = params.email().ok_or_else(|| missing("email"))?;

        Ok(Required {
            amount,
            currency,
            email,
        })
    }

    fn base_data(params: &AuthorizeParameters) -> FieldGroup {
        vec![
            (fields::SITE, params.site.clone()),
            (fields::RANK, params.rank.clone()),
            (fields::IDENTIFIER, params.identifier.clone()),
        ]
    }

    fn transaction_data(
        &self,
        params: &AuthorizeParameters,
        required: &Required<'_>,
    ) -> Result<FieldGroup> {
        let time = match params.time() {
            Some(time) => time.to_string(),
            None => self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, false),
        };

        Ok(vec![
            (fields::HASH, HASH_ALGORITHM.to_string()),
            (
                fields::TOTAL,
                self.formatter
                    .minor_units(required.amount, required.currency)?
                    .to_string(),
            ),
            (fields::CURRENCY, self.formatter.numeric_code(required.currency)?),
            (
                fields::COMMAND,
                params.transaction_id.clone().unwrap_or_default(),
            ),
            (fields::HOLDER, required.email.to_string()),
            (
                fields::ECHO_FIELDS,
                echo_fields(params.want_abonne, params.has_token()),
            ),
            (fields::TIME, time),
        ])
    }

    /// Browser return URLs are sent all together or not at all.
    fn url_data(params: &AuthorizeParameters) -> FieldGroup {
        let mut group = FieldGroup::new();
        if let Some(notify) = params.notify_url() {
            group.push((fields::NOTIFY_URL, notify.to_string()));
        }
        if let Some(ret) = params.return_url() {
            group.push((fields::SUCCESS_URL, ret.to_string()));
            group.push((fields::REFUSED_URL, ret.to_string()));
            group.push((
                fields::CANCELLED_URL,
                params.cancel_url().unwrap_or_default().to_string(),
            ));
            group.push((fields::PENDING_URL, ret.to_string()));
        }
        group
    }

    /// Subscriber fields travel as a pair; one without the other is dropped.
    fn abonne_data(params: &AuthorizeParameters) -> FieldGroup {
        let (Some(reference), Some(token)) = (params.subscriber_reference(), params.token()) else {
            return FieldGroup::new();
        };

        let mut group = vec![
            (fields::SUBSCRIBER_REFERENCE, reference.to_string()),
            (fields::SUBSCRIBER_TOKEN, token.to_string()),
        ];
        if let Some(expiry) = params.token_expiry() {
            group.push((fields::TOKEN_EXPIRY, expiry.to_string()));
        }
        group
    }
}
