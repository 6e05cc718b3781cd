use crate::quiz::{Answer, BankError, Question, Topic, TopicSection};

/// Read-only provider of the four topic sections.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    sections: Vec<TopicSection>,
}

impl QuestionBank {
    pub fn new(sections: Vec<TopicSection>) -> Self {
        Self { sections }
    }

    /// The macroeconomics review quiz.
    pub fn standard() -> Self {
        Self::new(vec![
            TopicSection::new(
                Topic::RationalExpectations,
                "Teoria das Expectativas Racionais (TER)",
                "Teste seus conhecimentos sobre como os agentes formam expectativas e como isso afeta a economia.",
                "📊",
                RATIONAL_EXPECTATIONS.to_vec(),
            ),
            TopicSection::new(
                Topic::RealBusinessCycles,
                "Modelos de Ciclos Reais de Negócios",
                "Avalie sua compreensão sobre como choques de produtividade podem afetar a economia.",
                "📈",
                REAL_BUSINESS_CYCLES.to_vec(),
            ),
            TopicSection::new(
                Topic::NewKeynesian,
                "Modelos Novo-Keynesianos e Custos de Cardápio",
                "Teste seu conhecimento sobre rigidez de preços e seus efeitos na economia.",
                "🏛️",
                NEW_KEYNESIAN.to_vec(),
            ),
            TopicSection::new(
                Topic::LabourMarket,
                "Mercado de Trabalho, Bancário e Assimetria de Informação",
                "Verifique sua compreensão sobre problemas de informação nos mercados reais.",
                "💼",
                LABOUR_MARKET.to_vec(),
            ),
        ])
    }

    pub fn sections(&self) -> &[TopicSection] {
        &self.sections
    }

    pub fn section(&self, topic: Topic) -> Result<&TopicSection, BankError> {
        self.sections
            .iter()
            .find(|s| s.topic == topic)
            .ok_or(BankError::MissingSection(topic))
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(TopicSection::len).sum()
    }

    /// Every topic must have a section and every record must be displayable.
    pub fn validate(&self) -> Result<(), BankError> {
        for topic in Topic::ALL {
            self.section(topic)?;
        }
        for section in &self.sections {
            for (i, question) in section.questions.iter().enumerate() {
                question.validate(section.topic, i + 1)?;
            }
        }
        Ok(())
    }
}

const RATIONAL_EXPECTATIONS: [Question; 16] = [
    Question::new(
        "Na TER, um choque monetário não modifica de forma permanente a oferta real.",
        Answer::False,
        "Os choques monetários têm efeitos temporários, pois os agentes ajustam rapidamente suas expectativas.",
    ),
    Question::new(
        "Na função de oferta de Lucas, se o preço atual excede o preço esperado, a oferta real supera a oferta prevista.",
        Answer::True,
        "Conforme Lucas, pt > p̂ implica que Y > Ŷ.",
    ),
    Question::new(
        "Na TER, o governo ajusta sua política monetária de acordo com o grau de realização das expectativas.",
        Answer::False,
        "Os agentes já incorporam todas as informações disponíveis, tornando ineficaz a modificação da política com base em expectativas.",
    ),
    Question::new(
        "Na TER, o ciclo econômico não pode ser cumulativo.",
        Answer::True,
        "Ciclos ocorrem a partir de choques exógenos e os ajustes das expectativas evitam processos cumulativos.",
    ),
    Question::new(
        "As curvas de Phillips na TER não se restringem apenas ao curto prazo.",
        Answer::False,
        "A curva de Phillips é considerada vertical tanto no curto quanto no longo prazo na TER.",
    ),
    Question::new(
        "O ciclo econômico na TER não se explica exclusivamente por choques monetários.",
        Answer::False,
        "Choques reais, como tecnológicos, também são determinantes para o ciclo econômico.",
    ),
    Question::new(
        "A Teoria das Expectativas Racionais não considera a existência de custos de ajuste na economia, o que limita sua capacidade de explicar certas flutuações econômicas.",
        Answer::True,
        "A TER assume ajustes instantâneos, desconsiderando custos de mudança de preços e rigidez salarial.",
    ),
    Question::new(
        "Agentes formam suas expectativas utilizando todas as informações disponíveis, inclusive o modelo econômico vigente.",
        Answer::True,
        "A TER parte do pressuposto de que os agentes são racionais e utilizam todo o conhecimento disponível.",
    ),
    Question::new(
        "Políticas monetárias e fiscais são sempre eficazes no curto prazo, pois os agentes não antecipam seus efeitos.",
        Answer::False,
        "Os agentes antecipam os efeitos, o que torna essas políticas ineficazes tanto no curto quanto no longo prazo.",
    ),
    Question::new(
        "A curva de Phillips, segundo a TER, é vertical no curto e longo prazo.",
        Answer::True,
        "Isso demonstra a ausência de trade-off entre inflação e desemprego na abordagem de expectativas racionais.",
    ),
    Question::new(
        "Políticas econômicas sistemáticas são ineficazes, pois os agentes ajustam antecipadamente suas expectativas.",
        Answer::True,
        "A antecipação dos agentes neutraliza os efeitos de políticas sistemáticas.",
    ),
    Question::new(
        "A crítica da TER ao keynesianismo defende que choques de demanda agregada explicam flutuações persistentes.",
        Answer::False,
        "A TER enfatiza que choques reais, e não apenas de demanda, explicam as flutuações econômicas.",
    ),
    Question::new(
        "A TER defende que modelos macroeconômicos devem incorporar microfundamentos, como o comportamento otimizador dos agentes.",
        Answer::True,
        "Integrar microfundamentos é crucial para uma análise mais consistente do comportamento dos agentes.",
    ),
    Question::new(
        "Os agentes utilizam toda a informação disponível para formar expectativas, sem acesso a informações futuras.",
        Answer::True,
        "Essa é uma hipótese central da TER.",
    ),
    Question::new(
        "O modelo assume que os erros de previsão são sempre nulos, já que os agentes possuem informações perfeitas.",
        Answer::False,
        "Erros de previsão ocorrem e são considerados ruído branco no modelo.",
    ),
    Question::new(
        "Políticas econômicas não sistemáticas podem ter efeitos temporários sobre o produto e o emprego.",
        Answer::True,
        "Políticas inesperadas podem surpreender os agentes e gerar efeitos transitórios antes do ajuste completo das expectativas.",
    ),
];

const REAL_BUSINESS_CYCLES: [Question; 7] = [
    Question::new(
        "Os ciclos econômicos na Teoria dos Ciclos Reais são causados principalmente por choques monetários.",
        Answer::False,
        "Os modelos apontam choques reais, como inovações tecnológicas, como principais motores dos ciclos.",
    ),
    Question::new(
        "Um choque de produtividade positivo temporário leva a um aumento do salário e, devido ao efeito substituição, a um acréscimo na oferta de trabalho.",
        Answer::False,
        "Choques positivos tendem a aumentar o salário e a oferta de trabalho, não a reduzi-la.",
    ),
    Question::new(
        "Na Teoria dos Ciclos Reais, o ciclo econômico reflete a manutenção das condições de maximização dos agentes.",
        Answer::True,
        "Os agentes respondem a choques exógenos de forma a manter suas condições de maximização.",
    ),
    Question::new(
        "Nos modelos RBC, os ciclos são causados exclusivamente por choques de demanda agregada.",
        Answer::False,
        "Os modelos RBC enfatizam choques reais, não apenas de demanda, como fonte dos ciclos.",
    ),
    Question::new(
        "Um aumento na produtividade gera, de forma temporária, elevação no emprego e no produto nos modelos RBC.",
        Answer::True,
        "Choques de produtividade têm efeitos positivos transitórios sobre a economia.",
    ),
    Question::new(
        "A flexibilidade de salários e preços nos modelos RBC garante o ajuste rápido dos mercados.",
        Answer::True,
        "Essa flexibilidade elimina desequilíbrios, promovendo ajustes eficientes.",
    ),
    Question::new(
        "Nos Modelos de Ciclos Reais, um choque negativo de produtividade reduz temporariamente o emprego, mas não afeta o produto de longo prazo.",
        Answer::False,
        "A redução da produtividade pode afetar o crescimento do capital e do trabalho, impactando o produto no longo prazo.",
    ),
];

const NEW_KEYNESIAN: [Question; 9] = [
    Question::new(
        "No caso da análise microeconômica de Mankiw (duopólio), o ótimo é alcançado mesmo com preços parcialmente rígidos.",
        Answer::False,
        "A rigidez de preços gera falhas de coordenação e conduz a resultados subótimos.",
    ),
    Question::new(
        "As falhas de coordenação no mercado decorrem de externalidades de demanda entre as empresas.",
        Answer::True,
        "Decisões interdependentes podem gerar externalidades que afetam a eficiência do mercado.",
    ),
    Question::new(
        "Os efeitos da recessão são integralmente compensados somente quando os preços são totalmente flexíveis.",
        Answer::False,
        "Mesmo com flexibilidade, podem persistir efeitos devido a ineficiências e atrasos de ajuste.",
    ),
    Question::new(
        "No modelo de Mankiw, a rigidez dos preços é explicada pelos custos de cardápio (menu costs).",
        Answer::True,
        "Os custos associados à mudança de preços explicam a rigidez observada.",
    ),
    Question::new(
        "A histerese no mercado de trabalho implica que choques temporários podem ter efeitos permanentes sobre o emprego.",
        Answer::True,
        "Choques podem alterar a dinâmica do mercado de trabalho de forma duradoura.",
    ),
    Question::new(
        "Akerlof, Grossman e Stiglitz defendem que a qualidade dos bens pode variar independentemente do preço, refutando o postulado de homogeneidade.",
        Answer::True,
        "Em mercados com assimetrias de informação, o preço não reflete necessariamente a qualidade.",
    ),
    Question::new(
        "No modelo de Mankiw, os custos de menu tornam ajustes frequentes de preços inviáveis, mesmo com pequenas mudanças na demanda.",
        Answer::False,
        "Custos de menu tornam o ajuste oneroso, levando as empresas a alterarem preços com menos frequência.",
    ),
    Question::new(
        "A rigidez de preços pode provocar falhas de coordenação e resultar em equilíbrios subótimos.",
        Answer::True,
        "A dificuldade de ajustes simultâneos pode gerar distorções na economia.",
    ),
    Question::new(
        "A rigidez nominal de preços é irrelevante para a política monetária, pois não afeta o produto real.",
        Answer::False,
        "A rigidez nominal pode amplificar os efeitos das políticas monetárias, afetando o produto no curto prazo.",
    ),
];

const LABOUR_MARKET: [Question; 10] = [
    Question::new(
        "No mercado de trabalho, o conceito de salário de eficiência sugere que salários mais altos podem elevar a produtividade dos trabalhadores.",
        Answer::True,
        "Salários elevados podem reduzir a rotatividade e incentivar maior empenho, aumentando a produtividade.",
    ),
    Question::new(
        "De acordo com a teoria neoclássica, um aumento na taxa de juros sempre resulta em maior oferta de crédito no mercado bancário.",
        Answer::False,
        "A elevação dos juros pode aumentar o risco de inadimplência e, consequentemente, reduzir a oferta de crédito.",
    ),
    Question::new(
        "A assimetria de informação no mercado de trabalho pode ocasionar desemprego involuntário, mesmo quando os salários são flexíveis.",
        Answer::True,
        "A dificuldade em distinguir entre trabalhadores produtivos e menos produtivos pode levar a ineficiências no emprego.",
    ),
    Question::new(
        "O fenômeno da histerese implica que recessões podem ter efeitos permanentes sobre o produto potencial da economia.",
        Answer::True,
        "Recessões podem deixar cicatrizes, afetando a capacidade produtiva de forma duradoura.",
    ),
    Question::new(
        "O postulado de homogeneidade foi refutado por modelos que ressaltam a heterogeneidade e as assimetrias de informação entre os agentes.",
        Answer::True,
        "Esses modelos mostram que qualidade e preço não estão necessariamente correlacionados em mercados reais.",
    ),
    Question::new(
        "A refutação do postulado de homogeneidade afirma que, em mercados com assimetria de informação, o preço sempre reflete a qualidade do bem.",
        Answer::False,
        "Em mercados com informação imperfeita, preços podem não refletir qualidade, como destacado por Akerlof no problema do 'mercado de limões'",
    ),
    Question::new(
        "Salários de eficiência não têm relevância para explicar o desemprego involuntário.",
        Answer::False,
        "O conceito de salário de eficiência pode afetar a produtividade e, por consequência, os níveis de emprego.",
    ),
    Question::new(
        "Assimetrias de informação no mercado de trabalho podem levar à seleção adversa, prejudicando a alocação eficiente dos recursos humanos.",
        Answer::True,
        "Quando os empregadores não conseguem diferenciar a qualidade dos candidatos, ocorre seleção adversa.",
    ),
    Question::new(
        "Problemas de moral hazard no mercado bancário são irrelevantes para a concessão de crédito.",
        Answer::False,
        "O moral hazard aumenta o risco dos empréstimos, impactando negativamente a oferta de crédito.",
    ),
    Question::new(
        "Em mercados com informação perfeita, a regulação bancária seria desnecessária.",
        Answer::True,
        "A informação perfeita permitiria ajustes eficientes nos contratos, reduzindo a necessidade de intervenção regulatória.",
    ),
];
