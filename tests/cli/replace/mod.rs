mod substitutes_variables_contract;
