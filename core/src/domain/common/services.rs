use crate::domain::common::policies::AirCookPolicy;

/// Every domain service trait is implemented on this struct, parameterised
/// by the ports it talks to.
#[derive(Clone)]
pub struct Service<RR, UR, IR, AR, H, T, LLM> {
    pub(crate) recipe_repository: RR,
    pub(crate) user_repository: UR,
    pub(crate) ingredient_repository: IR,
    pub(crate) allergy_repository: AR,
    pub(crate) hasher_repository: H,
    pub(crate) token_service: T,
    pub(crate) llm_client: LLM,
    pub(crate) policy: AirCookPolicy,
}

impl<RR, UR, IR, AR, H, T, LLM> Service<RR, UR, IR, AR, H, T, LLM> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        recipe_repository: RR,
        user_repository: UR,
        ingredient_repository: IR,
        allergy_repository: AR,
        hasher_repository: H,
        token_service: T,
        llm_client: LLM,
        policy: AirCookPolicy,
    ) -> Self {
        Self {
            recipe_repository,
            user_repository,
            ingredient_repository,
            allergy_repository,
            hasher_repository,
            token_service,
            llm_client,
            policy,
        }
    }
}
