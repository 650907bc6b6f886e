//! User-facing strings, one table per [`Locale`].

use store::Locale;

/// Every user-facing message and label the client produces.
#[derive(Debug)]
pub struct Strings {
    pub loading: &'static str,
    pub loading_dashboard: &'static str,
    pub server_unreachable: &'static str,
    pub request_failed: &'static str,
    pub session_expired: &'static str,
    pub invalid_login_response: &'static str,
    pub login_failed: &'static str,
    pub signup_failed: &'static str,
    pub username_required: &'static str,
    pub username_too_short: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub password_required: &'static str,
    pub password_too_short: &'static str,
    pub passwords_mismatch: &'static str,
    pub personal_scope: &'static str,
    pub today: &'static str,
    pub yesterday: &'static str,
    pub no_transactions: &'static str,
    pub no_budgets: &'static str,
    pub no_projects: &'static str,

    // Navigation
    pub app_name: &'static str,
    pub nav_dashboard: &'static str,
    pub nav_profile: &'static str,
    pub logout: &'static str,

    // Sign-in pages
    pub sign_in: &'static str,
    pub sign_in_subtitle: &'static str,
    pub sign_up: &'static str,
    pub sign_up_title: &'static str,
    pub sign_up_subtitle: &'static str,
    pub creating_account: &'static str,
    pub no_account: &'static str,
    pub have_account: &'static str,
    pub field_username: &'static str,
    pub field_email: &'static str,
    pub field_password: &'static str,
    pub field_password_hint: &'static str,
    pub field_confirm_password: &'static str,
    pub field_first_name: &'static str,
    pub field_last_name: &'static str,
    pub field_name: &'static str,

    // Dashboard
    pub total_balance: &'static str,
    pub income: &'static str,
    pub expenses: &'static str,
    pub balance: &'static str,
    pub tab_overview: &'static str,
    pub tab_projects: &'static str,
    pub tab_budgets: &'static str,
    pub this_month: &'static str,
    pub recent_transactions: &'static str,
    pub top_expense_categories: &'static str,
    pub uncategorized: &'static str,
    pub used: &'static str,
    pub remaining: &'static str,
    pub column_status: &'static str,
    pub column_budget: &'static str,
    pub column_spent: &'static str,
    pub column_progress: &'static str,

    // Filters and badges
    pub period_all: &'static str,
    pub period_monthly: &'static str,
    pub period_quarterly: &'static str,
    pub period_yearly: &'static str,
    pub status_planning: &'static str,
    pub status_active: &'static str,
    pub status_on_hold: &'static str,
    pub status_completed: &'static str,
    pub status_cancelled: &'static str,
    pub status_other: &'static str,
    pub tx_pending: &'static str,
    pub tx_failed: &'static str,
    pub tx_unknown: &'static str,
}

static EN: Strings = Strings {
    loading: "Loading...",
    loading_dashboard: "Loading dashboard...",
    server_unreachable: "The server did not respond. Check your connection.",
    request_failed: "The request could not be completed.",
    session_expired: "Your session has expired. Please sign in again.",
    invalid_login_response: "Login failed: invalid response from server.",
    login_failed: "Login failed. Please check your credentials.",
    signup_failed: "Sign up failed. Please try again.",
    username_required: "Username is required",
    username_too_short: "Username must be at least 3 characters",
    email_required: "Email is required",
    email_invalid: "Invalid email",
    password_required: "Password is required",
    password_too_short: "Password must be at least 8 characters",
    passwords_mismatch: "Passwords do not match",
    personal_scope: "Personal",
    today: "Today",
    yesterday: "Yesterday",
    no_transactions: "No recent transactions",
    no_budgets: "No budgets found",
    no_projects: "No projects found",

    // Navigation
    app_name: "Finance",
    nav_dashboard: "Dashboard",
    nav_profile: "Profile",
    logout: "Logout",

    // Sign-in pages
    sign_in: "Sign in",
    sign_in_subtitle: "Sign in to your account",
    sign_up: "Sign up",
    sign_up_title: "Create Account",
    sign_up_subtitle: "Start tracking your finances",
    creating_account: "Creating account...",
    no_account: "Don't have an account? ",
    have_account: "Already have an account? ",
    field_username: "Username",
    field_email: "Email",
    field_password: "Password",
    field_password_hint: "Password (min 8 characters)",
    field_confirm_password: "Confirm password",
    field_first_name: "First name",
    field_last_name: "Last name",
    field_name: "Name",

    // Dashboard
    total_balance: "Total balance",
    income: "Income",
    expenses: "Expenses",
    balance: "Balance",
    tab_overview: "Overview",
    tab_projects: "Projects",
    tab_budgets: "Budgets",
    this_month: "This month",
    recent_transactions: "Recent transactions",
    top_expense_categories: "Top expense categories",
    uncategorized: "Uncategorized",
    used: "used",
    remaining: "remaining",
    column_status: "Status",
    column_budget: "Budget",
    column_spent: "Spent",
    column_progress: "Progress",

    // Filters and badges
    period_all: "All",
    period_monthly: "Monthly",
    period_quarterly: "Quarterly",
    period_yearly: "Yearly",
    status_planning: "Planning",
    status_active: "Active",
    status_on_hold: "On Hold",
    status_completed: "Completed",
    status_cancelled: "Cancelled",
    status_other: "Other",
    tx_pending: "pending",
    tx_failed: "failed",
    tx_unknown: "unknown",
};

static PT_BR: Strings = Strings {
    loading: "Carregando...",
    loading_dashboard: "Carregando painel...",
    server_unreachable: "O servidor não respondeu. Verifique sua conexão.",
    request_failed: "Ocorreu um erro na solicitação.",
    session_expired: "Sua sessão expirou. Entre novamente.",
    invalid_login_response: "Login falhou: resposta inválida do servidor.",
    login_failed: "Falha no login. Verifique suas credenciais.",
    signup_failed: "Falha no cadastro. Por favor, tente novamente.",
    username_required: "Nome de usuário é obrigatório",
    username_too_short: "Nome de usuário deve ter pelo menos 3 caracteres",
    email_required: "Email é obrigatório",
    email_invalid: "Email inválido",
    password_required: "Senha é obrigatória",
    password_too_short: "Senha deve ter pelo menos 8 caracteres",
    passwords_mismatch: "As senhas não correspondem",
    personal_scope: "Pessoal",
    today: "Hoje",
    yesterday: "Ontem",
    no_transactions: "Nenhuma transação recente",
    no_budgets: "Nenhum orçamento encontrado",
    no_projects: "Nenhum projeto encontrado",

    // Navigation
    app_name: "Finanças",
    nav_dashboard: "Painel",
    nav_profile: "Perfil",
    logout: "Sair",

    // Sign-in pages
    sign_in: "Entrar",
    sign_in_subtitle: "Entre na sua conta",
    sign_up: "Cadastrar",
    sign_up_title: "Criar Conta",
    sign_up_subtitle: "Comece a acompanhar suas finanças",
    creating_account: "Criando conta...",
    no_account: "Não tem uma conta? ",
    have_account: "Já tem uma conta? ",
    field_username: "Nome de usuário",
    field_email: "Email",
    field_password: "Senha",
    field_password_hint: "Senha (mínimo 8 caracteres)",
    field_confirm_password: "Confirme a senha",
    field_first_name: "Nome",
    field_last_name: "Sobrenome",
    field_name: "Nome",

    // Dashboard
    total_balance: "Saldo total",
    income: "Receitas",
    expenses: "Despesas",
    balance: "Saldo",
    tab_overview: "Visão geral",
    tab_projects: "Projetos",
    tab_budgets: "Orçamentos",
    this_month: "Este mês",
    recent_transactions: "Transações recentes",
    top_expense_categories: "Principais categorias de despesa",
    uncategorized: "Sem categoria",
    used: "usado",
    remaining: "restante",
    column_status: "Status",
    column_budget: "Orçamento",
    column_spent: "Gasto",
    column_progress: "Progresso",

    // Filters and badges
    period_all: "Todos",
    period_monthly: "Mensal",
    period_quarterly: "Trimestral",
    period_yearly: "Anual",
    status_planning: "Planejamento",
    status_active: "Ativo",
    status_on_hold: "Em espera",
    status_completed: "Concluído",
    status_cancelled: "Cancelado",
    status_other: "Outro",
    tx_pending: "pendente",
    tx_failed: "falhou",
    tx_unknown: "desconhecido",
};

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
        }
    }

    pub fn en() -> &'static Strings {
        &EN
    }
}
